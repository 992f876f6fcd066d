use super::cursor::Cursor;
use super::lex::{ident_len, skip_trivia, take_ident};
use super::number::parse_number;
use super::parse_value;
use super::strings::parse_string;
use crate::classify::{is_ident_start, is_ws};
use crate::error::{ParseError, ParseErrorKind};
use crate::normalize::Logger;
use crate::options::Options;
use serde_json::{Map, Value};

/// Parse an object body; the cursor sits on `{`. Keys may be quoted with
/// either quote style, bare identifiers, or number tokens; each key needs a
/// colon; members are comma-separated with a trailing comma tolerated.
pub(crate) fn parse_object(
    cur: &mut Cursor,
    opts: &Options,
    logger: &mut Logger,
    depth: usize,
) -> Result<Value, ParseError> {
    cur.advance(1);
    let mut map = Map::new();
    let mut pending_comma: Option<usize> = None;

    loop {
        skip_trivia(cur, opts);
        match cur.peek_byte() {
            None => return Err(cur.error(ParseErrorKind::UnexpectedEnd)),
            Some(b'}') => {
                cur.advance(1);
                if let Some(at) = pending_comma {
                    logger.log(at, "removed trailing comma");
                }
                return Ok(Value::Object(map));
            }
            _ => {}
        }

        let key = parse_key(cur, logger)?;

        skip_trivia(cur, opts);
        if !cur.eat_byte(b':') {
            return Err(cur.error(ParseErrorKind::ColonExpected));
        }

        let value = parse_value(cur, opts, logger, depth + 1)?;
        map.insert(key, value);

        skip_trivia(cur, opts);
        match cur.peek_byte() {
            Some(b',') => {
                pending_comma = Some(cur.pos());
                cur.advance(1);
            }
            Some(b'}') => {
                cur.advance(1);
                return Ok(Value::Object(map));
            }
            Some(_) => {
                let c = cur.peek_char().unwrap_or('\u{FFFD}');
                return Err(cur.error(ParseErrorKind::UnexpectedChar(c)));
            }
            None => return Err(cur.error(ParseErrorKind::UnexpectedEnd)),
        }
    }
}

fn parse_key(cur: &mut Cursor, logger: &mut Logger) -> Result<String, ParseError> {
    let at = cur.pos();
    match cur.peek_byte() {
        Some(b'"' | b'\'') => parse_string(cur),
        Some(b) if is_ident_start(b) => {
            let ident = take_ident(cur);
            logger.log(at, "quoted unquoted object key");
            Ok(ident.to_string())
        }
        Some(b) if b == b'-' || b == b'.' || b.is_ascii_digit() => {
            // Python dicts allow number keys; render them the way
            // json.dumps does.
            let number = parse_number(cur)?;
            logger.log(at, "quoted unquoted object key");
            Ok(number.to_string())
        }
        _ => Err(cur.error(ParseErrorKind::ObjectKeyExpected)),
    }
}

/// Parse constructor-call arguments; the cursor sits just past `(` and
/// `call_pos` is the identifier's offset. Keyword arguments become object
/// members; a single positional argument unwraps to the value; an empty
/// call is an empty object; any other mix is an error.
pub(crate) fn parse_call_arguments(
    cur: &mut Cursor,
    opts: &Options,
    logger: &mut Logger,
    depth: usize,
    call_pos: usize,
) -> Result<Value, ParseError> {
    let mut map = Map::new();
    let mut positional: Vec<Value> = Vec::new();

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

        if let Some(name) = peek_keyword_argument(cur) {
            let name = name.to_string();
            consume_keyword_prefix(cur);
            let value = parse_value(cur, opts, logger, depth + 1)?;
            map.insert(name, value);
        } else {
            positional.push(parse_value(cur, opts, logger, depth + 1)?);
        }

        skip_trivia(cur, opts);
        match cur.peek_byte() {
            Some(b',') => {
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

    match (map.is_empty(), positional.len()) {
        (false, 0) => Ok(Value::Object(map)),
        (true, 1) => Ok(positional.remove(0)),
        (true, 0) => Ok(Value::Object(map)),
        _ => Err(ParseError::new(
            ParseErrorKind::UnsupportedCallArguments,
            call_pos,
        )),
    }
}

/// `ident` followed by optional ASCII whitespace and `=`: a keyword
/// argument. Values never start with `=`, so one lookahead byte decides.
fn peek_keyword_argument<'i>(cur: &Cursor<'i>) -> Option<&'i str> {
    let rest = cur.rest();
    let len = ident_len(rest);
    if len == 0 {
        return None;
    }
    let mut after = rest[len..].as_bytes();
    while let Some((&b, tail)) = after.split_first() {
        if is_ws(b) {
            after = tail;
        } else if b == b'=' {
            return Some(&rest[..len]);
        } else {
            return None;
        }
    }
    None
}

fn consume_keyword_prefix(cur: &mut Cursor) {
    take_ident(cur);
    while let Some(b) = cur.peek_byte() {
        if is_ws(b) {
            cur.advance(1);
        } else {
            break;
        }
    }
    cur.eat_byte(b'=');
}
