use crate::error::FormatError;
use crate::options::Options;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io;

/// Serialize a value as pretty JSON with four-space indentation. Member
/// and element order is whatever the value tree holds.
pub(crate) fn render(value: &Value, opts: &Options) -> Result<String, FormatError> {
    let mut buf: Vec<u8> = Vec::with_capacity(128);
    if opts.ensure_ascii {
        let mut ser = Serializer::with_formatter(&mut buf, AsciiPretty::new());
        value
            .serialize(&mut ser)
            .map_err(|e| FormatError::Write(e.to_string()))?;
    } else {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        value
            .serialize(&mut ser)
            .map_err(|e| FormatError::Write(e.to_string()))?;
    }
    String::from_utf8(buf).map_err(|e| FormatError::Write(e.to_string()))
}

// Pretty formatter that escapes every non-ASCII character as \uXXXX, with
// surrogate pairs above the BMP. Indentation is delegated; only string
// fragments are rewritten.
struct AsciiPretty<'a>(PrettyFormatter<'a>);

impl AsciiPretty<'_> {
    fn new() -> Self {
        AsciiPretty(PrettyFormatter::with_indent(b"    "))
    }
}

impl Formatter for AsciiPretty<'_> {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0usize;
        let bytes = fragment.as_bytes();
        for (i, ch) in fragment.char_indices() {
            if ch <= '\u{7F}' {
                continue;
            }
            if i > start {
                writer.write_all(&bytes[start..i])?;
            }
            let cp = ch as u32;
            if cp <= 0xFFFF {
                // char is never a surrogate half, so this round-trips.
                write!(writer, "\\u{cp:04X}")?;
            } else {
                let v = cp - 0x1_0000;
                let high = 0xD800 + ((v >> 10) & 0x3FF);
                let low = 0xDC00 + (v & 0x3FF);
                write!(writer, "\\u{high:04X}\\u{low:04X}")?;
            }
            start = i + ch.len_utf8();
        }
        if start < fragment.len() {
            writer.write_all(&bytes[start..])?;
        }
        Ok(())
    }
}
