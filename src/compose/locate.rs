//! Token lookup by path and structural rewriting.

use tracing::debug;

use crate::error::{GrammarError, Result};
use crate::grammar::{Grammar, Pattern, Token};

/// Split `a/b/c` into (`Some("a/b")`, `"c"`).
pub(super) fn split_path(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once('/') {
        Some((owner, last)) => (Some(owner), last),
        None => (None, path),
    }
}

fn first_inside(token: &Token) -> Option<&Grammar> {
    token.patterns().iter().find_map(Pattern::inside)
}

/// Find the token named by `path`.
pub fn find_token<'g>(grammar: &'g Grammar, path: &str) -> Option<&'g Token> {
    let mut segments = path.split('/');
    let mut token = grammar.token(segments.next()?)?;
    for segment in segments {
        token = first_inside(token)?.token(segment)?;
    }
    Some(token)
}

/// Mutable variant of [`find_token`].
pub fn find_token_mut<'g>(grammar: &'g mut Grammar, path: &str) -> Option<&'g mut Token> {
    let (owner_path, name) = split_path(path);
    let owner = match owner_path {
        Some(owner_path) => find_inside_mut(grammar, owner_path)?,
        None => grammar,
    };
    owner.token_mut(name)
}

/// Inside grammar of the first pattern of the token at `path` that has one.
pub fn find_inside<'g>(grammar: &'g Grammar, path: &str) -> Option<&'g Grammar> {
    first_inside(find_token(grammar, path)?)
}

/// Mutable variant of [`find_inside`].
pub fn find_inside_mut<'g>(grammar: &'g mut Grammar, path: &str) -> Option<&'g mut Grammar> {
    let mut current = grammar;
    for segment in path.split('/') {
        current = current
            .token_mut(segment)?
            .patterns_mut()
            .iter_mut()
            .find_map(Pattern::inside_mut)?;
    }
    Some(current)
}

/// Replace the whole pattern list of the token at `path`.
///
/// This rewrites the grammar in place and is only meant for grammars still
/// under construction.
pub fn replace_patterns(
    grammar: &mut Grammar,
    path: &str,
    patterns: impl IntoIterator<Item = Pattern>,
) -> Result<()> {
    let root = grammar.name.clone();
    let token = find_token_mut(grammar, path)
        .ok_or_else(|| GrammarError::token_not_found(root.clone(), path))?;
    token.replace_patterns(patterns)?;
    debug!(grammar = %root, path, "Replaced token patterns");
    Ok(())
}
