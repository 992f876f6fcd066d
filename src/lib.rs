mod classify;
pub mod cli;
pub mod error;
mod format;
mod normalize;
pub mod options;
mod parser;
mod pretty;
mod scan;
mod unescape;

pub use error::{FormatError, ParseError, ParseErrorKind};
pub use normalize::NormalizeLogEntry;
pub use options::Options;
pub use scan::{Fragment, scan_fragments};
pub use unescape::collapse_escapes;

/// Format a string that is JSON or almost JSON into pretty-printed strict
/// JSON with four-space indentation. Tolerates Python and JavaScript
/// notation, comments, trailing commas, constructor-call wrappers, JSON
/// embedded in surrounding text, and input whose quotes arrived escaped.
pub fn format_to_string(input: &str, opts: &Options) -> Result<String, FormatError> {
    format::format_impl(input, opts, false).map(|(out, _)| out)
}

/// Like [`format_to_string`], additionally returning a log of the repairs
/// that were applied.
pub fn format_to_string_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<NormalizeLogEntry>), FormatError> {
    format::format_impl(input, opts, true)
}

use std::io::Write;

/// Format and write the result into an `io::Write`.
pub fn format_to_writer<W: Write>(
    input: &str,
    opts: &Options,
    writer: &mut W,
) -> Result<(), FormatError> {
    let out = format_to_string(input, opts)?;
    writer
        .write_all(out.as_bytes())
        .map_err(|e| FormatError::Write(e.to_string()))
}

/// Parse one almost-JSON document into a `serde_json::Value` without
/// rendering it. Unlike [`format_to_string`] this treats the whole input
/// as a single document; surrounding prose is an error here.
pub fn normalize_to_value(input: &str, opts: &Options) -> Result<serde_json::Value, FormatError> {
    if input.trim().is_empty() {
        return Err(FormatError::EmptyInput);
    }
    match normalize::parse_candidate(input, opts, false) {
        Ok((value, _)) => Ok(value),
        Err(err) => {
            if opts.collapse_escaped_input {
                let collapsed = unescape::collapse_escapes(input);
                if collapsed != input
                    && let Ok((value, _)) = normalize::parse_candidate(&collapsed, opts, false)
                {
                    return Ok(value);
                }
            }
            Err(FormatError::InvalidSyntax(err))
        }
    }
}

#[cfg(test)]
mod tests;
