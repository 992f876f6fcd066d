use super::*;
use std::borrow::Cow;

#[test]
fn untouched_input_borrows() {
    assert!(matches!(
        collapse_escapes("{\"a\": 1}"),
        Cow::Borrowed(_)
    ));
}

#[test]
fn quote_escapes_collapse() {
    assert_eq!(collapse_escapes(r#"\"a\""#), "\"a\"");
    assert_eq!(collapse_escapes(r#"\'a\'"#), "'a'");
}

#[test]
fn whitespace_escapes_collapse() {
    assert_eq!(collapse_escapes(r#"a\nb\tc\rd"#), "a\nb\tc\rd");
}

#[test]
fn double_backslash_collapses_once() {
    assert_eq!(collapse_escapes(r#"a\\b"#), "a\\b");
    // One pass only: backslash-backslash-quote ends as backslash-quote.
    assert_eq!(collapse_escapes(r#"\\\""#), "\\\"");
}

#[test]
fn unknown_escapes_are_kept() {
    assert_eq!(collapse_escapes(r#"\x41A"#), r#"\x41A"#);
    // Unicode escapes stay intact for the string parser to decode later.
    assert_eq!(collapse_escapes(r#"A"#), r#"A"#);
}

#[test]
fn doubly_escaped_document_formats() {
    let input = r#"[{\"type\": \"cases\", \"count\": 1}]"#;
    let expected = r#"[
    {
        "type": "cases",
        "count": 1
    }
]"#;
    assert_eq!(fmt(input), expected);
}

#[test]
fn escaped_single_quotes_format() {
    assert_eq!(fmt(r#"{\'a\': 1}"#), "{\n    \"a\": 1\n}");
}

#[test]
fn valid_json_with_escaped_quote_is_not_collapsed() {
    // The raw strategies run first, so a legitimate \" inside a strict
    // document survives.
    let input = "{\"q\": \"say \\\" ok\"}";
    assert_eq!(fmt(input), "{\n    \"q\": \"say \\\" ok\"\n}");
}
