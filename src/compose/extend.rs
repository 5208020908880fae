//! Snapshot-and-patch derivation of grammars.

use tracing::debug;

use crate::base::Name;
use crate::error::Result;
use crate::grammar::{Grammar, Token};
use crate::registry::GrammarRegistry;

/// Derive a new grammar from the registered grammar `base`.
///
/// Tokens sharing a name with a base token replace it in place (override,
/// not merge); other tokens are appended. The registered base is untouched.
pub fn extend(
    registry: &GrammarRegistry,
    base: &str,
    name: impl Into<Name>,
    tokens: impl IntoIterator<Item = Token>,
) -> Result<Grammar> {
    extend_filtered(registry, base, name, |_| true, tokens)
}

/// Like [`extend`], dropping base tokens for which `keep` returns false
/// before the new tokens are applied.
pub fn extend_filtered(
    registry: &GrammarRegistry,
    base: &str,
    name: impl Into<Name>,
    keep: impl FnMut(&Token) -> bool,
    tokens: impl IntoIterator<Item = Token>,
) -> Result<Grammar> {
    let base = registry.require(base)?;
    Ok(derive(&base, name, keep, tokens))
}

/// Derive a new grammar from a grammar value already in hand.
pub fn derive(
    base: &Grammar,
    name: impl Into<Name>,
    mut keep: impl FnMut(&Token) -> bool,
    tokens: impl IntoIterator<Item = Token>,
) -> Grammar {
    let mut derived = Grammar {
        name: name.into(),
        tokens: base
            .tokens
            .iter()
            .filter(|(_, token)| keep(token))
            .map(|(key, token)| (key.clone(), token.clone()))
            .collect(),
        parent: Some(base.name.clone()),
    };

    let dropped = base.len() - derived.len();
    let mut overridden = 0usize;
    let mut appended = 0usize;
    for token in tokens {
        if derived.contains(token.name()) {
            overridden += 1;
        } else {
            appended += 1;
        }
        derived.upsert(token);
    }

    debug!(
        base = %base.name,
        derived = %derived.name,
        dropped,
        overridden,
        appended,
        "Derived grammar"
    );
    derived
}

/// Remove every token for which `keep` returns false.
pub fn filter_tokens(grammar: &mut Grammar, mut keep: impl FnMut(&Token) -> bool) {
    let before = grammar.len();
    grammar.tokens.retain(|_, token| keep(token));
    debug!(
        grammar = %grammar.name,
        removed = before - grammar.len(),
        "Filtered tokens"
    );
}
