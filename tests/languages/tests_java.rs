use crate::helpers::{BUNDLED, assert_round_trip, matched, tokenize};

#[test]
fn test_annotation_is_aliased_punctuation() {
    let text = "@Override void run() {}";
    let nodes = tokenize("java", text);
    assert_eq!(
        matched(&nodes),
        [
            ("annotation", "@Override"),
            ("keyword", "void"),
            ("function", "run"),
            ("punctuation", "("),
            ("punctuation", ")"),
            ("punctuation", "{"),
            ("punctuation", "}"),
        ]
    );
    assert_eq!(nodes[0].as_matched().unwrap().kind(), "punctuation");
    assert_round_trip(&nodes, text);
}

#[test]
fn test_generics_tokenized_inside() {
    let nodes = tokenize("java", "<String, Integer> map");
    let generics = nodes[0].as_matched().unwrap();
    assert_eq!(generics.name.as_str(), "generics");
    assert_eq!(generics.kind(), "function");
    assert_eq!(generics.text, "<String, Integer>");
    assert_eq!(
        matched(&generics.children),
        [("punctuation", "<"), ("punctuation", ","), ("punctuation", ">")]
    );
    assert_eq!(generics.children[1].text(), "String");
}

#[test]
fn test_operator_context_goes_to_literal() {
    let nodes = tokenize("java", "x = 1.5f;");
    assert_eq!(
        matched(&nodes),
        [("operator", "="), ("number", "1.5f"), ("punctuation", ";")]
    );
    assert_eq!(nodes[0].text(), "x ");
    assert_eq!(nodes[1].text(), "=");
}

#[test]
fn test_member_access_is_not_an_operator() {
    let nodes = tokenize("java", "a.b");
    assert_eq!(matched(&nodes), [("punctuation", ".")]);
}

#[test]
fn test_priority_of_inserted_tokens() {
    let java = BUNDLED.require("java").unwrap();
    let names: Vec<_> = java.token_names().collect();
    let at = |name: &str| names.iter().position(|n| *n == name).unwrap();
    assert_eq!(at("generics") + 1, at("class-name"));
    assert_eq!(at("annotation") + 1, at("function"));
    assert!(at("keyword") < at("annotation"));
}
