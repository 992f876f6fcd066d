use super::*;

#[test]
fn empty_and_blank_input_are_errors() {
    for input in ["", "   ", " \n\t "] {
        let err = crate::format_to_string(input, &opts()).unwrap_err();
        assert_eq!(err, FormatError::EmptyInput, "input={:?}", input);
    }
    assert_eq!(FormatError::EmptyInput.to_string(), "input is empty");
}

#[test]
fn bare_identifier_member_is_invalid() {
    let err = crate::format_to_string("{\"name\": \"test\", invalid}", &opts()).unwrap_err();
    let FormatError::InvalidSyntax(pe) = err else {
        panic!("expected InvalidSyntax, got {err:?}");
    };
    assert_eq!(pe.kind, ParseErrorKind::ColonExpected);
    assert_eq!(pe.position, 24);
}

#[test]
fn bare_identifier_value_is_invalid() {
    let err = crate::format_to_string("{\"a\": yes}", &opts()).unwrap_err();
    let FormatError::InvalidSyntax(pe) = err else {
        panic!("expected InvalidSyntax, got {err:?}");
    };
    assert_eq!(pe.kind, ParseErrorKind::UnexpectedIdentifier("yes".to_string()));
    assert_eq!(pe.position, 6);
    assert_eq!(
        pe.to_string(),
        "bare identifier \"yes\" is not a value at position 6"
    );
}

#[test]
fn plain_prose_passes_through_unchanged() {
    for input in ["hello world", "Status: 200 OK", "a < b && c > d"] {
        assert_eq!(fmt(input), input, "input={:?}", input);
    }
}

#[test]
fn prose_with_braces_is_invalid() {
    let err = crate::format_to_string("use {braces} wisely", &opts()).unwrap_err();
    assert!(matches!(err, FormatError::InvalidSyntax(_)));
}

#[test]
fn unclosed_containers_are_invalid() {
    for input in ["[1, 2", "{\"a\": 1", "{\"a\": \"unterminated"] {
        let err = crate::format_to_string(input, &opts()).unwrap_err();
        assert!(matches!(err, FormatError::InvalidSyntax(_)), "input={:?}", input);
    }
}

#[test]
fn missing_value_and_separators_are_invalid() {
    for input in ["{\"a\": }", "{\"a\": 1 \"b\": 2}", "{\"a\" 1}", "[1 2]"] {
        let err = crate::format_to_string(input, &opts()).unwrap_err();
        assert!(matches!(err, FormatError::InvalidSyntax(_)), "input={:?}", input);
    }
}

#[test]
fn trailing_partial_fragment_is_kept_verbatim() {
    // The complete span splices; the unclosed one reads as surrounding text.
    let out = fmt("{\"a\": 1} {\"b\": 2");
    assert_eq!(out, "{\n    \"a\": 1\n} {\"b\": 2");
}

#[test]
fn normalize_to_value_rejects_trailing_garbage() {
    let err = crate::normalize_to_value("{\"a\": 1} x", &opts()).unwrap_err();
    let FormatError::InvalidSyntax(pe) = err else {
        panic!("expected InvalidSyntax");
    };
    assert_eq!(pe.kind, ParseErrorKind::TrailingCharacters);
}

#[test]
fn nesting_beyond_the_depth_limit_is_invalid() {
    let input = format!("{}{}", "[".repeat(200), "]".repeat(200));
    let err = crate::format_to_string(&input, &opts()).unwrap_err();
    let FormatError::InvalidSyntax(pe) = err else {
        panic!("expected InvalidSyntax");
    };
    assert_eq!(pe.kind, ParseErrorKind::DepthLimitExceeded);
}

#[test]
fn normalize_to_value_rejects_prose() {
    let err = crate::normalize_to_value("Status: Success", &opts()).unwrap_err();
    assert!(matches!(err, FormatError::InvalidSyntax(_)));
    let err = crate::normalize_to_value("  ", &opts()).unwrap_err();
    assert_eq!(err, FormatError::EmptyInput);
}

#[test]
fn normalize_to_value_parses_tolerantly() {
    let v = crate::normalize_to_value("{'a': True,}", &opts()).unwrap();
    assert_eq!(v, serde_json::json!({"a": true}));
}
