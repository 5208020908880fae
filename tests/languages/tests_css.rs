use crate::helpers::{assert_round_trip, find, matched, tokenize};

#[test]
fn test_rule_with_selector_parts_and_hexcode() {
    let text = "a:hover .b #id { color: #fff; }";
    let nodes = tokenize("css", text);
    assert_eq!(
        matched(&nodes),
        [
            ("selector", "a:hover .b #id "),
            ("punctuation", "{"),
            ("property", "color"),
            ("punctuation", ":"),
            ("hexcode", "#fff"),
            ("punctuation", ";"),
            ("punctuation", "}"),
        ]
    );

    let selector = nodes[0].as_matched().unwrap();
    assert_eq!(
        matched(&selector.children),
        [("pseudo-class", ":hover"), ("class", ".b"), ("id", "#id")]
    );
    assert_eq!(selector.children[0].text(), "a");
    assert_round_trip(&nodes, text);
}

#[test]
fn test_pseudo_element_and_attribute() {
    let nodes = tokenize("css", "p::first-line, [type=text] {}");
    let selector = find(&nodes, "selector").unwrap();
    assert_eq!(
        matched(&selector.children),
        [("pseudo-element", "::first-line"), ("attribute", "[type=text]")]
    );
}

#[test]
fn test_numbers_and_entities() {
    let nodes = tokenize("css", r#"width: 50%; content: "\201C";"#);
    assert_eq!(
        matched(&nodes),
        [
            ("property", "width"),
            ("punctuation", ":"),
            ("number", "50%"),
            ("punctuation", ";"),
            ("property", "content"),
            ("punctuation", ":"),
            ("string", r#""\201C""#),
            ("punctuation", ";"),
        ]
    );

    let nodes = tokenize("css", r"a\2014 b");
    assert_eq!(find(&nodes, "entity").unwrap().text, r"\2014");
}

#[test]
fn test_atrule_rule_and_body_tokens() {
    let nodes = tokenize("css", "@import url(\"a.css\");");
    let atrule = nodes[0].as_matched().unwrap();
    assert_eq!(atrule.name.as_str(), "atrule");
    assert_eq!(atrule.children[0].name(), Some("rule"));
    assert_eq!(atrule.children[0].text(), "@import");
    assert!(find(&atrule.children, "url").is_some());
}

#[test]
fn test_comment_and_important() {
    let nodes = tokenize("css", "/* x */ color: red !important");
    assert_eq!(
        matched(&nodes),
        [
            ("comment", "/* x */"),
            ("property", "color"),
            ("punctuation", ":"),
            ("important", "!important"),
        ]
    );
}
