//! Tokenizer.
//!
//! Turns text into a tree of [`TokenNode`]s using one [`Grammar`]:
//!
//! ```text
//! "var x = 5"  ──go──▶  [keyword "var"] [" x "] [operator "="] [" "] [number "5"]
//! ```
//!
//! Tokenization is total: text no pattern matches becomes a literal node, and
//! the leaves of the resulting tree always concatenate back to the input.

mod node;
mod scan;
mod visitor;

pub use node::{Leaves, MatchedToken, TokenNode, concat_text};
pub use visitor::{Visitor, walk};

use tracing::trace;

use crate::grammar::Grammar;

/// Tokenize `text` with `grammar`.
pub fn tokenize<'a>(grammar: &Grammar, text: &'a str) -> Vec<TokenNode<'a>> {
    let nodes = scan::Scanner::new(grammar, text, 0).run();
    trace!(
        grammar = grammar.name(),
        len = text.len(),
        nodes = nodes.len(),
        "Tokenized"
    );
    nodes
}
