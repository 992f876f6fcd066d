mod array;
mod cursor;
mod lex;
mod number;
mod object;
mod strings;

use crate::error::{ParseError, ParseErrorKind};
use crate::normalize::Logger;
use crate::options::Options;
use array::{parse_array, parse_tuple};
use cursor::Cursor;
use lex::{ident_len, skip_bom, skip_trivia, take_ident};
use number::parse_number;
use object::{parse_call_arguments, parse_object};
use serde_json::Value;
use strings::parse_string;

// serde_json refuses to nest deeper than this; so do we.
const MAX_DEPTH: usize = 128;

/// Parse one tolerant document: a single value with nothing but trivia
/// around it. Anything left over after the value is an error.
pub(crate) fn parse_document(
    input: &str,
    opts: &Options,
    logger: &mut Logger,
) -> Result<Value, ParseError> {
    let mut cur = Cursor::new(input);
    skip_bom(&mut cur);
    let value = parse_value(&mut cur, opts, logger, 0)?;
    skip_trivia(&mut cur, opts);
    if !cur.is_empty() {
        return Err(cur.error(ParseErrorKind::TrailingCharacters));
    }
    Ok(value)
}

pub(crate) fn parse_value(
    cur: &mut Cursor,
    opts: &Options,
    logger: &mut Logger,
    depth: usize,
) -> Result<Value, ParseError> {
    skip_trivia(cur, opts);
    if depth >= MAX_DEPTH {
        return Err(cur.error(ParseErrorKind::DepthLimitExceeded));
    }
    match cur.peek_byte() {
        None => Err(cur.error(ParseErrorKind::UnexpectedEnd)),
        Some(b'{') => parse_object(cur, opts, logger, depth),
        Some(b'[') => parse_array(cur, opts, logger, depth),
        Some(b'(') => parse_tuple(cur, opts, logger, depth),
        Some(b'"' | b'\'') => Ok(Value::String(parse_string(cur)?)),
        Some(b'-') => parse_signed(cur, opts, logger),
        Some(b) if b == b'.' || b.is_ascii_digit() => Ok(Value::Number(parse_number(cur)?)),
        Some(b) if crate::classify::is_ident_start(b) => {
            parse_identifier(cur, opts, logger, depth)
        }
        Some(_) => {
            let c = cur.peek_char().unwrap_or('\u{FFFD}');
            Err(cur.error(ParseErrorKind::UnexpectedChar(c)))
        }
    }
}

/// A `-` starts either a number or a negative non-finite spelling such as
/// `-Infinity` from JavaScript or `-inf` from Python's repr.
fn parse_signed(
    cur: &mut Cursor,
    opts: &Options,
    logger: &mut Logger,
) -> Result<Value, ParseError> {
    let tail = &cur.rest()[1..];
    let len = ident_len(tail);
    if len > 0 && opts.normalize_nonfinite && matches!(&tail[..len], "Infinity" | "inf") {
        logger.log(cur.pos(), "replaced non-finite number with null");
        cur.advance(1 + len);
        return Ok(Value::Null);
    }
    Ok(Value::Number(parse_number(cur)?))
}

/// Bare identifiers cover the strict keywords, the Python and JavaScript
/// spellings we normalize, and constructor calls. Anything else is an
/// error rather than an implicitly quoted string.
fn parse_identifier(
    cur: &mut Cursor,
    opts: &Options,
    logger: &mut Logger,
    depth: usize,
) -> Result<Value, ParseError> {
    let at = cur.pos();
    let ident = take_ident(cur);
    match ident {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        "null" => return Ok(Value::Null),
        "True" | "False" | "None" if opts.allow_python_keywords => {
            logger.log(at, "normalized python keyword");
            return Ok(match ident {
                "True" => Value::Bool(true),
                "False" => Value::Bool(false),
                _ => Value::Null,
            });
        }
        "undefined" if opts.repair_undefined => {
            logger.log(at, "replaced undefined with null");
            return Ok(Value::Null);
        }
        "NaN" | "Infinity" | "nan" | "inf" if opts.normalize_nonfinite => {
            logger.log(at, "replaced non-finite number with null");
            return Ok(Value::Null);
        }
        _ => {}
    }

    skip_trivia(cur, opts);
    if opts.unwrap_constructor_calls && cur.peek_byte() == Some(b'(') {
        cur.advance(1);
        let value = parse_call_arguments(cur, opts, logger, depth, at)?;
        logger.log(at, "unwrapped constructor call");
        return Ok(value);
    }
    Err(ParseError::new(
        ParseErrorKind::UnexpectedIdentifier(ident.to_string()),
        at,
    ))
}
