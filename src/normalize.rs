use crate::error::ParseError;
use crate::options::Options;
use crate::parser::parse_document;
use serde::Serialize;
use serde_json::Value;

/// One repair applied while normalizing a piece of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizeLogEntry {
    /// Byte offset into the formatted text where the repair happened.
    pub position: usize,
    /// Stable description of the repair, suitable for matching.
    pub message: &'static str,
    /// Snippet of the source text around `position`.
    pub context: String,
}

/// Collects repair positions while parsing. Context snippets are resolved
/// afterwards so failed parse attempts never pay for them.
#[derive(Default)]
pub(crate) struct Logger {
    enable: bool,
    entries: Vec<(usize, &'static str)>,
}

impl Logger {
    pub(crate) fn new(enable: bool) -> Self {
        Logger {
            enable,
            entries: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn log(&mut self, position: usize, message: &'static str) {
        if self.enable {
            self.entries.push((position, message));
        }
    }

    /// Resolve entries against the text they were recorded in. `base`
    /// shifts positions into the coordinates of the surrounding input when
    /// `source` was carved out of it.
    pub(crate) fn into_entries(
        self,
        source: &str,
        base: usize,
        window: usize,
    ) -> Vec<NormalizeLogEntry> {
        self.entries
            .into_iter()
            .map(|(position, message)| NormalizeLogEntry {
                position: base + position,
                message,
                context: context_snippet(source, position, window),
            })
            .collect()
    }
}

/// A window of `window` bytes to each side of `pos`, widened outwards to
/// char boundaries.
fn context_snippet(source: &str, pos: usize, window: usize) -> String {
    let pos = pos.min(source.len());
    let mut start = pos.saturating_sub(window);
    while start > 0 && !source.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = pos.saturating_add(window).min(source.len());
    while end < source.len() && !source.is_char_boundary(end) {
        end += 1;
    }
    source[start..end].to_string()
}

/// Parse one candidate text, returning the value tree together with the
/// repairs it took. Strict documents take a serde_json fast path and need
/// no repairs; everything else goes through the tolerant grammar.
pub(crate) fn parse_candidate(
    text: &str,
    opts: &Options,
    collect_log: bool,
) -> Result<(Value, Logger), ParseError> {
    let mut logger = Logger::new(collect_log);
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok((value, logger));
    }
    let value = parse_document(text, opts, &mut logger)?;
    Ok((value, logger))
}
