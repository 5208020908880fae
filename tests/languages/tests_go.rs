use rstest::rstest;

use crate::helpers::{BUNDLED, assert_round_trip, find, matched, tokenize};

#[test]
fn test_var_declaration() {
    let text = "var x int = 5";
    let nodes = tokenize("go", text);
    assert_eq!(
        matched(&nodes),
        [
            ("keyword", "var"),
            ("builtin", "int"),
            ("operator", "="),
            ("number", "5"),
        ]
    );
    assert_eq!(nodes[1].text(), " x ");
    assert_round_trip(&nodes, text);
}

#[test]
fn test_class_name_is_dropped() {
    let go = BUNDLED.require("go").unwrap();
    assert!(!go.contains("class-name"));
    assert_eq!(go.parent(), Some("clike"));

    let nodes = tokenize("go", "type Foo struct { x interface{} }");
    assert!(find(&nodes, "class-name").is_none());

    // the base keeps its token
    assert!(BUNDLED.require("clike").unwrap().contains("class-name"));
}

#[test]
fn test_builtin_sits_right_before_boolean() {
    let go = BUNDLED.require("go").unwrap();
    let builtin = go.position("builtin").unwrap();
    assert_eq!(go.position("boolean"), Some(builtin + 1));
}

#[test]
fn test_builtin_wins_over_function() {
    let nodes = tokenize("go", "x := len(s)");
    assert_eq!(
        matched(&nodes),
        [
            ("operator", ":="),
            ("builtin", "len"),
            ("punctuation", "("),
            ("punctuation", ")"),
        ]
    );
}

#[test]
fn test_new_is_builtin_not_class_context() {
    let nodes = tokenize("go", "new Foo");
    assert_eq!(matched(&nodes), [("builtin", "new")]);
    assert_eq!(nodes[1].text(), " Foo");
}

#[rstest]
#[case("`raw\nstring`", "string")]
#[case("'r'", "string")]
#[case("nil", "boolean")]
#[case("1.5e3i", "number")]
#[case("// note", "comment")]
fn test_single_token(#[case] text: &str, #[case] expected: &str) {
    let nodes = tokenize("go", text);
    assert_eq!(matched(&nodes), [(expected, text)]);
}
