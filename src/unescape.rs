use memchr::memchr;
use std::borrow::Cow;

/// Collapse one level of backslash escaping: `\"` and `\'` become bare
/// quotes, `\\` a single backslash, `\n`/`\r`/`\t` the control characters.
/// Any other backslash is kept as-is. Borrows when the input contains no
/// backslash at all.
///
/// A single pass, so `\\\"` collapses to `\"` rather than `"`.
pub fn collapse_escapes(input: &str) -> Cow<'_, str> {
    let Some(first) = memchr(b'\\', input.as_bytes()) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len());
    out.push_str(&input[..first]);
    let mut rest = &input[first..];
    loop {
        debug_assert!(rest.starts_with('\\'));
        let tail = &rest[1..];
        match tail.as_bytes().first() {
            Some(b'"') => {
                out.push('"');
                rest = &tail[1..];
            }
            Some(b'\'') => {
                out.push('\'');
                rest = &tail[1..];
            }
            Some(b'\\') => {
                out.push('\\');
                rest = &tail[1..];
            }
            Some(b'n') => {
                out.push('\n');
                rest = &tail[1..];
            }
            Some(b'r') => {
                out.push('\r');
                rest = &tail[1..];
            }
            Some(b't') => {
                out.push('\t');
                rest = &tail[1..];
            }
            _ => {
                out.push('\\');
                rest = tail;
            }
        }
        match memchr(b'\\', rest.as_bytes()) {
            Some(pos) => {
                out.push_str(&rest[..pos]);
                rest = &rest[pos..];
            }
            None => {
                out.push_str(rest);
                return Cow::Owned(out);
            }
        }
    }
}
