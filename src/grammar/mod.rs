//! Grammar model.
//!
//! Value types a grammar is built from:
//! - [`Pattern`] - one compiled regex plus lookbehind/global/alias/inside options
//! - [`Token`] - a named list of patterns tried in order
//! - [`Grammar`] - a named list of tokens tried in order
//!
//! A grammar owns its tokens and a pattern owns its optional inside grammar,
//! so the whole definition is a plain tree. Grammars are only mutated while a
//! caller holds them by value; once published to a
//! [`GrammarRegistry`](crate::registry::GrammarRegistry) they sit behind an
//! `Arc` and are read-only.

#[allow(clippy::module_inception)]
mod grammar;
mod pattern;
mod token;

pub use grammar::Grammar;
pub use pattern::{Pattern, PatternBuilder, PatternFlags};
pub(crate) use pattern::PatternMatch;
pub use token::Token;
