use thiserror::Error;

/// Why the tolerant parser rejected a candidate span.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("object key expected")]
    ObjectKeyExpected,
    #[error("colon expected after object key")]
    ColonExpected,
    #[error("invalid unicode escape")]
    InvalidUnicodeEscape,
    #[error("invalid number literal")]
    InvalidNumber,
    #[error("bare identifier {0:?} is not a value")]
    UnexpectedIdentifier(String),
    #[error("call arguments must be all keywords or a single value")]
    UnsupportedCallArguments,
    #[error("trailing characters after value")]
    TrailingCharacters,
    #[error("nesting depth limit exceeded")]
    DepthLimitExceeded,
}

/// A parse failure with the byte offset where it was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Shift the reported position, e.g. from fragment-relative to
    /// whole-input offsets.
    pub(crate) fn offset_by(mut self, base: usize) -> Self {
        self.position += base;
        self
    }
}

/// Errors surfaced by the formatting entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input was empty or contained only whitespace.
    #[error("input is empty")]
    EmptyInput,
    /// Input contains bracket structure but no repair strategy could
    /// produce valid JSON from it.
    #[error("invalid syntax: {0}")]
    InvalidSyntax(#[from] ParseError),
    /// The formatted output could not be serialized or written.
    #[error("write failed: {0}")]
    Write(String),
}
