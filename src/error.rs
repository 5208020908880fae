//! Error types for grammar authoring and composition.
//!
//! Every variant is a construction-time or composition-time failure. None of
//! them can be produced by tokenization itself: once a grammar is built,
//! tokenizing any text with it is total.

use thiserror::Error;

use crate::base::Name;

/// Errors that can occur while building, composing or looking up grammars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// Pattern could not be compiled, or its options contradict its regex.
    #[error("Invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Token constructed without any pattern.
    #[error("Token `{token}` has no patterns")]
    EmptyToken { token: Name },

    /// Two sibling tokens share a name.
    #[error("Duplicate token `{token}` in grammar `{grammar}`")]
    DuplicateToken { grammar: Name, token: Name },

    /// Grammar name is not registered and no locator could provide it.
    #[error("Unknown grammar: {0}")]
    UnknownGrammar(Name),

    /// Insertion anchor does not name a token of the grammar.
    #[error("Anchor token `{anchor}` not found in grammar `{grammar}`")]
    AnchorNotFound { grammar: Name, anchor: String },

    /// Token path does not resolve inside the grammar.
    #[error("Token `{path}` not found in grammar `{grammar}`")]
    TokenNotFound { grammar: Name, path: String },
}

impl GrammarError {
    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create an unknown grammar error.
    pub fn unknown_grammar(name: impl Into<Name>) -> Self {
        Self::UnknownGrammar(name.into())
    }

    /// Create a duplicate token error.
    pub fn duplicate_token(grammar: impl Into<Name>, token: impl Into<Name>) -> Self {
        Self::DuplicateToken {
            grammar: grammar.into(),
            token: token.into(),
        }
    }

    /// Create an anchor-not-found error.
    pub fn anchor_not_found(grammar: impl Into<Name>, anchor: impl Into<String>) -> Self {
        Self::AnchorNotFound {
            grammar: grammar.into(),
            anchor: anchor.into(),
        }
    }

    /// Create a token-not-found error.
    pub fn token_not_found(grammar: impl Into<Name>, path: impl Into<String>) -> Self {
        Self::TokenNotFound {
            grammar: grammar.into(),
            path: path.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = GrammarError> = std::result::Result<T, E>;
