use crate::error::{FormatError, ParseError, ParseErrorKind};
use crate::normalize::{NormalizeLogEntry, parse_candidate};
use crate::options::Options;
use crate::pretty::render;
use crate::scan::scan_fragments;
use crate::unescape::collapse_escapes;
use memchr::memchr2;

type PassOutcome = Option<(String, Vec<NormalizeLogEntry>)>;

/// Format an input that may be strict JSON, tolerant almost-JSON, JSON
/// buried in surrounding text, or JSON whose quotes arrived escaped.
///
/// Strategies run in order over the raw input first: parse the whole text
/// strictly, parse it tolerantly, then carve out fragments and splice the
/// repaired ones back in place. If none succeed and collapsing escape
/// sequences changes the text, the same strategies run once more over the
/// collapsed form. Inputs that still fail are an error when they contain a
/// brace or bracket and pass through unchanged when they are plain prose.
pub(crate) fn format_impl(
    input: &str,
    opts: &Options,
    collect_log: bool,
) -> Result<(String, Vec<NormalizeLogEntry>), FormatError> {
    if input.trim().is_empty() {
        return Err(FormatError::EmptyInput);
    }

    let mut first_err: Option<ParseError> = None;

    if let Some(done) = run_pass(input, opts, collect_log, &mut first_err)? {
        return Ok(done);
    }

    if opts.collapse_escaped_input {
        let collapsed = collapse_escapes(input);
        if collapsed != input
            && let Some(done) = run_pass(&collapsed, opts, collect_log, &mut first_err)?
        {
            return Ok(done);
        }
    }

    if memchr2(b'{', b'[', input.as_bytes()).is_some() {
        let err =
            first_err.unwrap_or_else(|| ParseError::new(ParseErrorKind::UnexpectedEnd, 0));
        return Err(FormatError::InvalidSyntax(err));
    }
    Ok((input.to_string(), Vec::new()))
}

/// One strategy pass over `text`: the whole document first, then
/// fragments. `Ok(None)` means every strategy declined; the first parse
/// error lands in `first_err`.
fn run_pass(
    text: &str,
    opts: &Options,
    collect_log: bool,
    first_err: &mut Option<ParseError>,
) -> Result<PassOutcome, FormatError> {
    match parse_candidate(text, opts, collect_log) {
        Ok((value, logger)) => {
            let entries = logger.into_entries(text, 0, opts.log_context_window);
            return Ok(Some((render(&value, opts)?, entries)));
        }
        Err(err) => record_first(first_err, err),
    }

    if opts.repair_fragments {
        if let Some(done) = splice_fragments(text, opts, collect_log, first_err)? {
            return Ok(Some(done));
        }
    }
    Ok(None)
}

/// Replace every parseable fragment of `text` with its formatted form,
/// keeping the surrounding text and any unparseable fragments untouched.
/// Declines unless at least one fragment parsed.
fn splice_fragments(
    text: &str,
    opts: &Options,
    collect_log: bool,
    first_err: &mut Option<ParseError>,
) -> Result<PassOutcome, FormatError> {
    let fragments = scan_fragments(text);
    if fragments.is_empty() {
        return Ok(None);
    }

    let mut out = String::with_capacity(text.len());
    let mut entries = Vec::new();
    let mut repaired = 0usize;
    let mut last = 0usize;
    for frag in fragments {
        match parse_candidate(frag.text, opts, collect_log) {
            Ok((value, logger)) => {
                out.push_str(&text[last..frag.start]);
                out.push_str(&render(&value, opts)?);
                last = frag.end;
                entries.extend(logger.into_entries(frag.text, frag.start, opts.log_context_window));
                repaired += 1;
            }
            Err(err) => record_first(first_err, err.offset_by(frag.start)),
        }
    }
    if repaired == 0 {
        return Ok(None);
    }
    out.push_str(&text[last..]);
    Ok(Some((out, entries)))
}

#[inline]
fn record_first(slot: &mut Option<ParseError>, err: ParseError) {
    if slot.is_none() {
        *slot = Some(err);
    }
}
