use memchr::{memchr2, memchr3};

/// A maximal top-level bracketed span found inside surrounding text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'i> {
    /// Byte offset of the opening bracket.
    pub start: usize,
    /// Byte offset one past the closing bracket.
    pub end: usize,
    /// The spanned text, equal to `&input[start..end]`.
    pub text: &'i str,
}

/// Walk `input` once and collect the maximal `{...}` / `[...]` spans that
/// are not inside a string.
///
/// Outside any span the scanner is in prose mode: quotes are ordinary text
/// and only `{`, `[` and `\` matter. Inside a span, a quote opens a string
/// that only the same unescaped delimiter closes, and brackets inside
/// strings do not count toward depth. A backslash suppresses the following
/// byte everywhere, so doubly-escaped text like `[{\"a\":1}]` still scans
/// as one span.
///
/// Nested structures produce a single outer span. A span left open at the
/// end of input is dropped; stray closing brackets in prose are ignored.
pub fn scan_fragments(input: &str) -> Vec<Fragment<'_>> {
    let bytes = input.as_bytes();
    let mut fragments = Vec::new();

    let mut i = 0usize;
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string: Option<u8> = None;
    let mut escape = false;

    while i < bytes.len() {
        let b = bytes[i];

        if escape {
            escape = false;
            i += 1;
            continue;
        }
        if b == b'\\' {
            escape = true;
            i += 1;
            continue;
        }

        if let Some(q) = in_string {
            if b == q {
                in_string = None;
                i += 1;
            } else {
                // Skip to the next closing delimiter or escape.
                match memchr2(q, b'\\', &bytes[i + 1..]) {
                    Some(rel) => i += 1 + rel,
                    None => i = bytes.len(),
                }
            }
            continue;
        }

        match b {
            b'"' | b'\'' if depth > 0 => {
                in_string = Some(b);
                i += 1;
            }
            b'{' | b'[' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
                i += 1;
            }
            b'}' | b']' => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        fragments.push(Fragment {
                            start,
                            end: i + 1,
                            text: &input[start..i + 1],
                        });
                    }
                }
                i += 1;
            }
            _ => {
                if depth == 0 {
                    // Prose: jump to the next opener or escape.
                    match memchr3(b'{', b'[', b'\\', &bytes[i + 1..]) {
                        Some(rel) => i += 1 + rel,
                        None => break,
                    }
                } else {
                    i += 1;
                }
            }
        }
    }

    fragments
}
