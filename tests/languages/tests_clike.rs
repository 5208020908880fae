use crate::helpers::{assert_round_trip, find, matched, tokenize};
use prism::base::text_range;

#[test]
fn test_class_name_excludes_new_keyword_context() {
    let nodes = tokenize("clike", "new Foo");
    assert_eq!(nodes.len(), 2);
    assert!(nodes[0].is_literal());
    assert_eq!(nodes[0].text(), "new ");
    assert_eq!(nodes[1].name(), Some("class-name"));
    assert_eq!(nodes[1].text(), "Foo");
    assert_eq!(nodes[1].range(), text_range(4, 7));
}

#[test]
fn test_qualified_class_name_has_punctuation_inside() {
    let nodes = tokenize("clike", "extends a.B");
    let class = find(&nodes, "class-name").unwrap();
    assert_eq!(class.text, "a.B");
    assert_eq!(class.children.len(), 3);
    assert_eq!(class.children[1].name(), Some("punctuation"));
}

#[test]
fn test_comments_and_strings() {
    let text = "x = \"a//b\"; // done";
    let nodes = tokenize("clike", text);
    assert_eq!(
        matched(&nodes),
        [
            ("operator", "="),
            ("string", "\"a//b\""),
            ("punctuation", ";"),
            ("comment", "// done"),
        ]
    );
    assert_round_trip(&nodes, text);
}

#[test]
fn test_function_call() {
    let nodes = tokenize("clike", "if (ready()) return 0x1F;");
    assert_eq!(
        matched(&nodes),
        [
            ("keyword", "if"),
            ("punctuation", "("),
            ("function", "ready"),
            ("punctuation", "("),
            ("punctuation", ")"),
            ("punctuation", ")"),
            ("keyword", "return"),
            ("number", "0x1F"),
            ("punctuation", ";"),
        ]
    );
}
