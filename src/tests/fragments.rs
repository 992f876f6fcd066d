use super::*;

#[test]
fn embedded_object_is_spliced_in_place() {
    let input =
        "Debug Token Response: \n{'data': {'app_id': '123', 'type': 'USER'}}\nStatus: Success";
    let expected = "Debug Token Response: \n{\n    \"data\": {\n        \"app_id\": \"123\",\n        \"type\": \"USER\"\n    }\n}\nStatus: Success";
    assert_eq!(fmt(input), expected);
}

#[test]
fn surrounding_text_survives_byte_for_byte() {
    assert_eq!(
        fmt("Result: {'ok': True}!"),
        "Result: {\n    \"ok\": true\n}!"
    );
}

#[test]
fn multiple_fragments_all_repair() {
    let out = fmt("a [1,] b {'x': 2,} c");
    assert_eq!(out, "a [\n    1\n] b {\n    \"x\": 2\n} c");
}

#[test]
fn unparseable_fragment_is_left_verbatim() {
    let out = fmt("bad: {oops} good: {'x': 1}");
    assert_eq!(out, "bad: {oops} good: {\n    \"x\": 1\n}");
}

#[test]
fn log_positions_use_input_coordinates() {
    let (_, log) = crate::format_to_string_with_log("x {'a': True} y", &opts()).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].message, "normalized python keyword");
    assert_eq!(log[0].position, 8);
}

#[test]
fn fragment_repair_can_be_disabled() {
    let opt = Options {
        repair_fragments: false,
        ..Default::default()
    };
    let err = crate::format_to_string("text {'a': 1} text", &opt).unwrap_err();
    assert!(matches!(err, FormatError::InvalidSyntax(_)));
}

#[test]
fn escaped_fragment_repairs_via_collapse() {
    // The object only parses after collapsing the escaped quotes.
    let input = r#"log: {\"level\": \"info\"} end"#;
    let out = fmt(input);
    assert_eq!(out, "log: {\n    \"level\": \"info\"\n} end");
}
