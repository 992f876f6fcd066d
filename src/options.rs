#[derive(Clone, Debug)]
pub struct Options {
    /// Accept and normalize Python-style keywords True/False/None.
    pub allow_python_keywords: bool,
    /// Convert the JavaScript value `undefined` into `null`.
    pub repair_undefined: bool,
    /// Normalize non-finite numbers (NaN/Infinity/-Infinity and Python
    /// nan/inf/-inf) to null.
    pub normalize_nonfinite: bool,
    /// Unwrap constructor-call notation like `Tag(key=value)` into a plain
    /// object, and `Tag(value)` into the value itself.
    pub unwrap_constructor_calls: bool,
    /// Skip `//`, `/* */` and `#` comments between tokens.
    pub strip_comments: bool,
    /// When the input parses under no strategy as-is, collapse one level of
    /// backslash escaping (\" \' \\ \n \r \t) and retry. Recovers JSON that
    /// was embedded as a quoted string inside another document or log line.
    pub collapse_escaped_input: bool,
    /// Repair bracketed fragments embedded in surrounding prose, splicing
    /// the formatted result back at the original offsets.
    pub repair_fragments: bool,
    /// When true, escape non-ASCII characters in output strings as \uXXXX.
    pub ensure_ascii: bool,
    /// Context window size used when building log context snippets: how
    /// many bytes are captured on each side of the position, widened to
    /// char boundaries.
    pub log_context_window: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allow_python_keywords: true,
            repair_undefined: true,
            normalize_nonfinite: true,
            unwrap_constructor_calls: true,
            strip_comments: true,
            collapse_escaped_input: true,
            repair_fragments: true,
            ensure_ascii: false,
            log_context_window: 10,
        }
    }
}
