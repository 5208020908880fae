//! Shared fixtures and assertions for integration tests.

use once_cell::sync::Lazy;
use prism::{BundledGrammars, GrammarRegistry, MatchedToken, TokenNode, concat_text};

/// Registry backed by the bundled grammars, shared across tests.
pub static BUNDLED: Lazy<GrammarRegistry> = Lazy::new(BundledGrammars::registry);

/// Tokenize `text` with a bundled grammar.
pub fn tokenize<'a>(grammar: &str, text: &'a str) -> Vec<TokenNode<'a>> {
    BUNDLED
        .tokenize(grammar, text)
        .unwrap_or_else(|err| panic!("tokenizing with {grammar} failed: {err}"))
}

/// `(token name, text)` of every top-level matched node.
pub fn matched<'n>(nodes: &'n [TokenNode<'_>]) -> Vec<(&'n str, &'n str)> {
    nodes
        .iter()
        .filter_map(TokenNode::as_matched)
        .map(|token| (token.name.as_str(), token.text))
        .collect()
}

/// First matched node named `name` at any depth.
pub fn find<'n, 'a>(nodes: &'n [TokenNode<'a>], name: &str) -> Option<&'n MatchedToken<'a>> {
    nodes.iter().find_map(|node| {
        let token = node.as_matched()?;
        if token.name.as_str() == name {
            Some(token)
        } else {
            find(&token.children, name)
        }
    })
}

/// Assert the leaves of `nodes` spell out `text` exactly.
pub fn assert_round_trip(nodes: &[TokenNode<'_>], text: &str) {
    assert_eq!(concat_text(nodes), text, "leaves must reproduce the input");
}
