use super::cursor::Cursor;
use crate::classify::{is_ident_continue, is_ident_start, is_ws};
use crate::options::Options;
use memchr::{memchr, memchr2};

pub(crate) fn skip_bom(cur: &mut Cursor) {
    if cur.rest().starts_with('\u{FEFF}') {
        cur.advance('\u{FEFF}'.len_utf8());
    }
}

/// Skip whitespace, and comments when `strip_comments` is on. Comment forms
/// are `// ...`, `/* ... */` and `# ...`; an unterminated block comment
/// swallows the rest of the input.
#[inline]
pub(crate) fn skip_trivia(cur: &mut Cursor, opts: &Options) {
    loop {
        let before = cur.pos();

        // Fast ASCII whitespace scan.
        let bytes = cur.rest().as_bytes();
        let mut i = 0usize;
        while i < bytes.len() && is_ws(bytes[i]) {
            i += 1;
        }
        cur.advance(i);

        if !opts.strip_comments {
            return;
        }

        let rest = cur.rest();
        let bytes = rest.as_bytes();
        if bytes.starts_with(b"//") || bytes.first() == Some(&b'#') {
            let skip = if bytes[0] == b'#' { 1 } else { 2 };
            match memchr2(b'\n', b'\r', &bytes[skip..]) {
                Some(pos) => cur.advance(skip + pos + 1),
                None => cur.advance(bytes.len()),
            }
            continue;
        }
        if bytes.starts_with(b"/*") {
            let mut off = 2usize;
            loop {
                match memchr(b'*', &bytes[off..]) {
                    Some(p) if off + p + 1 < bytes.len() && bytes[off + p + 1] == b'/' => {
                        cur.advance(off + p + 2);
                        break;
                    }
                    Some(p) => off += p + 1,
                    None => {
                        cur.advance(bytes.len());
                        break;
                    }
                }
            }
            continue;
        }

        if cur.pos() == before {
            return;
        }
    }
}

/// Length in bytes of the identifier prefix of `s` (ASCII letters, digits,
/// `_`, `$`; must not start with a digit). Zero when there is none.
#[inline]
pub(crate) fn ident_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(&b) if is_ident_start(b) => {}
        _ => return 0,
    }
    let mut end = 1usize;
    while end < bytes.len() && is_ident_continue(bytes[end]) {
        end += 1;
    }
    end
}

/// Consume and return the identifier at the cursor, or `""`.
pub(crate) fn take_ident<'i>(cur: &mut Cursor<'i>) -> &'i str {
    let rest = cur.rest();
    let len = ident_len(rest);
    cur.advance(len);
    &rest[..len]
}
