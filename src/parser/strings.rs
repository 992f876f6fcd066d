use super::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use memchr::memchr2;

/// Parse one quoted string literal at the cursor. Either quote style opens
/// the string and only the same unescaped quote closes it. JSON escapes and
/// `\uXXXX` (including surrogate pairs) are decoded; an unknown escape keeps
/// the escaped character; raw control characters are tolerated in the body.
/// An unclosed string or a malformed unicode escape is an error.
pub(crate) fn parse_string(cur: &mut Cursor) -> Result<String, ParseError> {
    let quote = match cur.peek_byte() {
        Some(q @ (b'"' | b'\'')) => q,
        Some(_) => {
            let c = cur.peek_char().unwrap_or('\u{FFFD}');
            return Err(cur.error(ParseErrorKind::UnexpectedChar(c)));
        }
        None => return Err(cur.error(ParseErrorKind::UnexpectedEnd)),
    };
    cur.advance(1);

    let mut out = String::new();
    loop {
        let rest = cur.rest();
        let bytes = rest.as_bytes();
        let Some(stop) = memchr2(quote, b'\\', bytes) else {
            cur.advance(rest.len());
            return Err(cur.error(ParseErrorKind::UnexpectedEnd));
        };
        out.push_str(&rest[..stop]);
        cur.advance(stop);
        if bytes[stop] == quote {
            cur.advance(1);
            return Ok(out);
        }

        // Escape sequence.
        cur.advance(1);
        let esc_pos = cur.pos();
        let Some(c) = cur.bump() else {
            return Err(cur.error(ParseErrorKind::UnexpectedEnd));
        };
        match c {
            '"' => out.push('"'),
            '\'' => out.push('\''),
            '\\' => out.push('\\'),
            '/' => out.push('/'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{0008}'),
            'f' => out.push('\u{000C}'),
            'u' => out.push(parse_unicode_escape(cur, esc_pos)?),
            other => out.push(other),
        }
    }
}

/// Decode the `XXXX` after `\u`, consuming a following `\uXXXX` low half
/// when the first is a high surrogate.
fn parse_unicode_escape(cur: &mut Cursor, esc_pos: usize) -> Result<char, ParseError> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidUnicodeEscape, esc_pos);
    let hi = hex4(cur).ok_or_else(invalid)?;
    if (0xDC00..=0xDFFF).contains(&hi) {
        return Err(invalid());
    }
    if (0xD800..=0xDBFF).contains(&hi) {
        if !cur.starts_with("\\u") {
            return Err(invalid());
        }
        cur.advance(2);
        let lo = hex4(cur).ok_or_else(invalid)?;
        if !(0xDC00..=0xDFFF).contains(&lo) {
            return Err(invalid());
        }
        let code = 0x1_0000 + (((hi - 0xD800) << 10) | (lo - 0xDC00));
        return char::from_u32(code).ok_or_else(invalid);
    }
    char::from_u32(hi).ok_or_else(invalid)
}

fn hex4(cur: &mut Cursor) -> Option<u32> {
    let hex = cur.rest().get(..4)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let v = u32::from_str_radix(hex, 16).ok()?;
    cur.advance(4);
    Some(v)
}
