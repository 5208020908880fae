//! Token tree produced by the tokenizer.

use crate::base::{Name, TextRange};

/// A node of the token tree.
///
/// Text is borrowed from the tokenized input and every range is an absolute
/// byte range into it, including ranges of nodes nested under inside grammars.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum TokenNode<'a> {
    /// Text no pattern matched, or lookbehind context.
    Literal { text: &'a str, range: TextRange },
    /// Text matched by a token's pattern.
    Matched(MatchedToken<'a>),
}

/// A matched token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchedToken<'a> {
    /// Name of the token whose pattern matched.
    pub name: Name,
    /// Alias of the pattern that matched, if any.
    pub alias: Option<Name>,
    pub text: &'a str,
    pub range: TextRange,
    /// Tokenization of `text` by the pattern's inside grammar; empty otherwise.
    pub children: Vec<TokenNode<'a>>,
}

impl<'a> MatchedToken<'a> {
    /// Display kind: the alias when present, else the token name.
    pub fn kind(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

impl<'a> TokenNode<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Self::Literal { text, .. } => *text,
            Self::Matched(token) => token.text,
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            Self::Literal { range, .. } => *range,
            Self::Matched(token) => token.range,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }

    pub fn as_matched(&self) -> Option<&MatchedToken<'a>> {
        match self {
            Self::Matched(token) => Some(token),
            Self::Literal { .. } => None,
        }
    }

    /// Token name of a matched node.
    pub fn name(&self) -> Option<&str> {
        self.as_matched().map(|token| token.name.as_str())
    }

    pub fn children(&self) -> &[TokenNode<'a>] {
        match self {
            Self::Matched(token) => &token.children,
            Self::Literal { .. } => &[],
        }
    }

    /// Leaf nodes below (or including) this node, in input order.
    pub fn leaves(&self) -> Leaves<'_, 'a> {
        Leaves::new(std::slice::from_ref(self))
    }
}

/// Depth-first iterator over leaf nodes.
#[derive(Debug, Clone)]
pub struct Leaves<'n, 'a> {
    stack: Vec<std::slice::Iter<'n, TokenNode<'a>>>,
}

impl<'n, 'a> Leaves<'n, 'a> {
    pub fn new(nodes: &'n [TokenNode<'a>]) -> Self {
        Self {
            stack: vec![nodes.iter()],
        }
    }
}

impl<'n, 'a> Iterator for Leaves<'n, 'a> {
    type Item = &'n TokenNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(node) if node.children().is_empty() => return Some(node),
                Some(node) => self.stack.push(node.children().iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Concatenate the text of every leaf in order.
///
/// For any tokenization of `s` this reproduces `s` exactly.
pub fn concat_text(nodes: &[TokenNode<'_>]) -> String {
    Leaves::new(nodes).map(TokenNode::text).collect()
}
