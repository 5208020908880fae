//! Depth-first traversal of token trees.

use super::{MatchedToken, TokenNode};
use crate::base::TextRange;

/// Callbacks for [`walk`]; every method defaults to a no-op.
pub trait Visitor<'a> {
    fn visit_literal(&mut self, _text: &'a str, _range: TextRange) {}

    /// Called before a matched token's children. Return `false` to skip them.
    fn enter_matched(&mut self, _token: &MatchedToken<'a>) -> bool {
        true
    }

    /// Called after a matched token's children (or right after
    /// [`enter_matched`](Visitor::enter_matched) when skipped).
    fn exit_matched(&mut self, _token: &MatchedToken<'a>) {}
}

/// Visit `nodes` depth-first, in input order.
pub fn walk<'a, V: Visitor<'a> + ?Sized>(nodes: &[TokenNode<'a>], visitor: &mut V) {
    for node in nodes {
        match node {
            TokenNode::Literal { text, range } => visitor.visit_literal(*text, *range),
            TokenNode::Matched(token) => {
                if visitor.enter_matched(token) {
                    walk(&token.children, visitor);
                }
                visitor.exit_matched(token);
            }
        }
    }
}
