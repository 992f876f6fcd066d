use super::cursor::Cursor;
use super::lex::skip_trivia;
use super::parse_value;
use crate::error::{ParseError, ParseErrorKind};
use crate::normalize::Logger;
use crate::options::Options;
use serde_json::Value;

/// Parse an array body; the cursor sits on `[`. Elements are comma-separated
/// with a trailing comma tolerated; a bare `...` element is dropped.
pub(crate) fn parse_array(
    cur: &mut Cursor,
    opts: &Options,
    logger: &mut Logger,
    depth: usize,
) -> Result<Value, ParseError> {
    cur.advance(1);
    let mut items = Vec::new();
    let mut pending_comma: Option<usize> = None;

    loop {
        skip_trivia(cur, opts);
        match cur.peek_byte() {
            None => return Err(cur.error(ParseErrorKind::UnexpectedEnd)),
            Some(b']') => {
                cur.advance(1);
                if let Some(at) = pending_comma {
                    logger.log(at, "removed trailing comma");
                }
                return Ok(Value::Array(items));
            }
            _ => {}
        }

        if cur.starts_with("...") {
            // Truncated reprs elide elements with an Ellipsis.
            logger.log(cur.pos(), "removed array ellipsis");
            cur.advance(3);
        } else {
            items.push(parse_value(cur, opts, logger, depth + 1)?);
        }

        skip_trivia(cur, opts);
        match cur.peek_byte() {
            Some(b',') => {
                pending_comma = Some(cur.pos());
                cur.advance(1);
            }
            Some(b']') => {
                cur.advance(1);
                return Ok(Value::Array(items));
            }
            Some(_) => {
                let c = cur.peek_char().unwrap_or('\u{FFFD}');
                return Err(cur.error(ParseErrorKind::UnexpectedChar(c)));
            }
            None => return Err(cur.error(ParseErrorKind::UnexpectedEnd)),
        }
    }
}

/// Parse a parenthesized group; the cursor sits on `(`. A single element
/// with no comma is plain grouping and passes through unchanged; anything
/// else is a Python tuple and becomes an array.
pub(crate) fn parse_tuple(
    cur: &mut Cursor,
    opts: &Options,
    logger: &mut Logger,
    depth: usize,
) -> Result<Value, ParseError> {
    let open = cur.pos();
    cur.advance(1);
    let mut items = Vec::new();
    let mut saw_comma = false;

    loop {
        skip_trivia(cur, opts);
        match cur.peek_byte() {
            None => return Err(cur.error(ParseErrorKind::UnexpectedEnd)),
            Some(b')') => {
                cur.advance(1);
                break;
            }
            _ => {}
        }

        items.push(parse_value(cur, opts, logger, depth + 1)?);

        skip_trivia(cur, opts);
        match cur.peek_byte() {
            Some(b',') => {
                saw_comma = true;
                cur.advance(1);
            }
            Some(b')') => {
                cur.advance(1);
                break;
            }
            Some(_) => {
                let c = cur.peek_char().unwrap_or('\u{FFFD}');
                return Err(cur.error(ParseErrorKind::UnexpectedChar(c)));
            }
            None => return Err(cur.error(ParseErrorKind::UnexpectedEnd)),
        }
    }

    if items.len() == 1 && !saw_comma {
        return Ok(items.remove(0));
    }
    logger.log(open, "converted tuple to array");
    Ok(Value::Array(items))
}
