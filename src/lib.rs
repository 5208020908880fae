//! # prism-engine
//!
//! Composable tokenization engine for syntax highlighting: grammars made of
//! ordered, regex-driven tokens, derived from one another without touching the
//! base definition, and a tokenizer that turns source text into a token tree.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! languages → Bundled grammar tables (brainfuck, clike, css, dart, go, java, json)
//!   ↓
//! compose   → extend / insert-before / insert-after / filter / locate-and-replace
//!   ↓
//! registry  → Caller-owned name → Grammar store, lazy locators, aliases
//!   ↓
//! tokenize  → Matching engine producing TokenNode trees
//!   ↓
//! grammar   → Pattern, Token, Grammar value types
//!   ↓
//! base      → Primitives (Name, TextRange), GrammarError
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use prism::{GrammarRegistry, Pattern, Token};
//!
//! let registry = GrammarRegistry::new();
//! registry.define(
//!     "brainfuck",
//!     [
//!         Token::single("pointer", Pattern::new("<|>")?),
//!         Token::single("increment", Pattern::new(r"\+")?),
//!     ],
//! )?;
//! let nodes = registry.tokenize("brainfuck", "+>")?;
//! ```

// ============================================================================
// MODULES (dependency order: base → grammar → tokenize → registry → compose)
// ============================================================================

/// Foundation types: Name, TextRange, TextSize
pub mod base;

/// Error taxonomy for grammar authoring
pub mod error;

/// Grammar model: Pattern, Token, Grammar
pub mod grammar;

/// Matching engine and token tree
pub mod tokenize;

/// Grammar registry and lazy locators
pub mod registry;

/// Composition operations that build derived grammars
pub mod compose;

/// Bundled grammar tables
#[cfg(feature = "languages")]
pub mod languages;

pub use base::{Name, TextRange, TextSize};
pub use error::{GrammarError, Result};
pub use grammar::{Grammar, Pattern, PatternBuilder, PatternFlags, Token};
pub use registry::{GrammarLocator, GrammarRegistry};
pub use tokenize::{MatchedToken, TokenNode, Visitor, concat_text, tokenize, walk};

#[cfg(feature = "languages")]
pub use languages::BundledGrammars;
