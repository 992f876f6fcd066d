use super::*;

#[test]
fn keyword_arguments_become_members() {
    assert_eq!(
        fmt_value("HumanMessage(content='hi', role='user')"),
        serde_json::json!({"content": "hi", "role": "user"})
    );
}

#[test]
fn single_positional_unwraps() {
    assert_eq!(
        fmt_value("AIMessage({'text': 'ok'})"),
        serde_json::json!({"text": "ok"})
    );
}

#[test]
fn empty_call_is_empty_object() {
    assert_eq!(fmt_value("{'m': Empty()}"), serde_json::json!({"m": {}}));
}

#[test]
fn calls_nest() {
    assert_eq!(
        fmt_value("Response(message=HumanMessage(content='x'), code=200)"),
        serde_json::json!({"message": {"content": "x"}, "code": 200})
    );
}

#[test]
fn calls_inside_arrays() {
    assert_eq!(
        fmt_value("[Tag(name='a'), Tag(name='b')]"),
        serde_json::json!([{"name": "a"}, {"name": "b"}])
    );
}

#[test]
fn whitespace_before_argument_list() {
    assert_eq!(fmt_value("{'t': Tag (name='x')}"), serde_json::json!({"t": {"name": "x"}}));
}

#[test]
fn keyword_values_may_be_tuples() {
    assert_eq!(
        fmt_value("Shape(points=((0, 0), (1, 1)))"),
        serde_json::json!({"points": [[0, 0], [1, 1]]})
    );
}

#[test]
fn multiple_positionals_are_invalid() {
    let err = crate::format_to_string("{\"p\": Point(1, 2)}", &opts()).unwrap_err();
    assert!(matches!(err, FormatError::InvalidSyntax(_)));
}

#[test]
fn mixed_arguments_are_invalid() {
    let err = crate::format_to_string("{\"t\": Tag('x', name='y')}", &opts()).unwrap_err();
    assert!(matches!(err, FormatError::InvalidSyntax(_)));
}

#[test]
fn braceless_call_text_passes_through_when_invalid() {
    // Two positionals cannot be normalized; without a brace in sight the
    // input counts as prose.
    let out = fmt("Point(1, 2)");
    assert_eq!(out, "Point(1, 2)");
}

#[test]
fn unwrapping_can_be_disabled() {
    let opts = Options {
        unwrap_constructor_calls: false,
        ..Default::default()
    };
    let err = crate::format_to_string("{\"m\": Msg(content='x')}", &opts).unwrap_err();
    assert!(matches!(err, FormatError::InvalidSyntax(_)));
}
