use super::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use serde_json::Number;

/// Parse a number token at the cursor. Tolerates a leading dot (`.25`), a
/// trailing dot (`1.`) and leading zeros, all normalized numerically. The
/// token must end at a delimiter; `10-20` or `123abc` are errors, as are
/// incomplete exponents and values outside f64 range.
pub(crate) fn parse_number(cur: &mut Cursor) -> Result<Number, ParseError> {
    let start = cur.pos();
    let rest = cur.rest();
    let bytes = rest.as_bytes();
    let invalid = |at: usize| ParseError::new(ParseErrorKind::InvalidNumber, at);

    let mut i = 0usize;
    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut is_float = false;
    if bytes.get(i) == Some(&b'.') {
        is_float = true;
        i += 1;
        let frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
        if int_digits == 0 && frac_digits == 0 {
            return Err(invalid(start));
        }
    } else if int_digits == 0 {
        return Err(invalid(start));
    }

    if let Some(b'e' | b'E') = bytes.get(i).copied() {
        let mut j = i + 1;
        if let Some(b'+' | b'-') = bytes.get(j).copied() {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits == 0 {
            return Err(invalid(start + j));
        }
        is_float = true;
        i = j + exp_digits;
    }

    // The token must be followed by a delimiter, not glued to more text.
    match bytes.get(i) {
        None | Some(b' ' | b'\t' | b'\n' | b'\r') => {}
        Some(b',' | b']' | b'}' | b')' | b':' | b'/' | b'#') => {}
        Some(_) => return Err(invalid(start + i)),
    }

    let text = &rest[..i];
    let number = if is_float {
        let f: f64 = text.parse().map_err(|_| invalid(start))?;
        Number::from_f64(f).ok_or_else(|| invalid(start))?
    } else if let Ok(n) = text.parse::<i64>() {
        Number::from(n)
    } else if let Ok(n) = text.parse::<u64>() {
        Number::from(n)
    } else {
        let f: f64 = text.parse().map_err(|_| invalid(start))?;
        Number::from_f64(f).ok_or_else(|| invalid(start))?
    };
    cur.advance(i);
    Ok(number)
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
