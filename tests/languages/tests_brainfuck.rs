use rstest::rstest;

use crate::helpers::{assert_round_trip, matched, tokenize};

#[test]
fn test_every_instruction_is_a_token() {
    let nodes = tokenize("brainfuck", "+>-<");
    assert_eq!(
        matched(&nodes),
        [
            ("increment", "+"),
            ("pointer", ">"),
            ("decrement", "-"),
            ("pointer", "<"),
        ]
    );
    let kinds: Vec<_> = nodes
        .iter()
        .filter_map(|node| node.as_matched())
        .map(|token| token.kind())
        .collect();
    assert_eq!(kinds, ["inserted", "keyword", "deleted", "keyword"]);
}

#[rstest]
#[case("[", "branching", "important")]
#[case(".", "operator", "operator")]
#[case(",", "operator", "operator")]
#[case("hello", "comment", "comment")]
fn test_single_token_kind(#[case] text: &str, #[case] name: &str, #[case] kind: &str) {
    let nodes = tokenize("brainfuck", text);
    assert_eq!(nodes.len(), 1);
    let token = nodes[0].as_matched().unwrap();
    assert_eq!(token.name.as_str(), name);
    assert_eq!(token.kind(), kind);
}

#[test]
fn test_loop_with_comment() {
    let text = "[.,] done";
    let nodes = tokenize("brainfuck", text);
    assert_eq!(
        matched(&nodes),
        [
            ("branching", "["),
            ("operator", "."),
            ("operator", ","),
            ("branching", "]"),
            ("comment", "done"),
        ]
    );
    assert_eq!(nodes[4].text(), " ");
    assert_round_trip(&nodes, text);
}
