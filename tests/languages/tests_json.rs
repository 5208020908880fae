use rstest::rstest;

use crate::helpers::{BUNDLED, assert_round_trip, matched, tokenize};

#[test]
fn test_object_with_property_number_and_boolean() {
    let text = r#"{"a":1,"b":true}"#;
    let nodes = tokenize("json", text);
    assert_eq!(
        matched(&nodes),
        [
            ("punctuation", "{"),
            ("property", r#""a""#),
            ("operator", ":"),
            ("number", "1"),
            ("punctuation", ","),
            ("property", r#""b""#),
            ("operator", ":"),
            ("boolean", "true"),
            ("punctuation", "}"),
        ]
    );
    assert!(nodes.iter().all(|node| !node.is_literal()));
    assert_round_trip(&nodes, text);
}

#[test]
fn test_array_values_keep_whitespace_as_literals() {
    let text = r#"[1, "x", null]"#;
    let nodes = tokenize("json", text);
    assert_eq!(
        matched(&nodes),
        [
            ("punctuation", "["),
            ("number", "1"),
            ("punctuation", ","),
            ("string", r#""x""#),
            ("punctuation", ","),
            ("null", "null"),
            ("punctuation", "]"),
        ]
    );
    assert_eq!(nodes[3].text(), " ");
    assert_round_trip(&nodes, text);
}

#[rstest]
#[case("TRUE", "boolean")]
#[case("Null", "null")]
#[case("-2.5e10", "number")]
#[case(r#""esc\"aped""#, "string")]
fn test_scalars(#[case] text: &str, #[case] expected: &str) {
    let nodes = tokenize("json", text);
    assert!(
        matched(&nodes).iter().any(|(name, _)| *name == expected),
        "{text} should contain a {expected} token: {nodes:?}"
    );
}

#[test]
fn test_jsonp_alias_resolves_to_json() {
    let text = r#"{"k": [0]}"#;
    let via_alias = BUNDLED.tokenize("jsonp", text).unwrap();
    let direct = tokenize("json", text);
    assert_eq!(via_alias, direct);
    assert_eq!(BUNDLED.require("jsonp").unwrap().name(), "json");
}
