//! Priority-relative token insertion.

use tracing::debug;

use super::locate::split_path;
use crate::error::{GrammarError, Result};
use crate::grammar::{Grammar, Token};

/// Splice `tokens` immediately before the token at `anchor`, giving them
/// priority over it.
pub fn insert_before_token(
    grammar: &mut Grammar,
    anchor: &str,
    tokens: impl IntoIterator<Item = Token>,
) -> Result<()> {
    insert_relative(grammar, anchor, tokens.into_iter().collect(), Side::Before)
}

/// Splice `tokens` immediately after the token at `anchor`, yielding
/// priority to it.
pub fn insert_after_token(
    grammar: &mut Grammar,
    anchor: &str,
    tokens: impl IntoIterator<Item = Token>,
) -> Result<()> {
    insert_relative(grammar, anchor, tokens.into_iter().collect(), Side::After)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Before,
    After,
}

fn insert_relative(
    grammar: &mut Grammar,
    anchor: &str,
    tokens: Vec<Token>,
    side: Side,
) -> Result<()> {
    let root = grammar.name.clone();
    let (owner_path, anchor_name) = split_path(anchor);
    let owner = match owner_path {
        Some(path) => super::find_inside_mut(grammar, path)
            .ok_or_else(|| GrammarError::anchor_not_found(root.clone(), anchor))?,
        None => grammar,
    };

    let index = owner
        .position(anchor_name)
        .ok_or_else(|| GrammarError::anchor_not_found(root.clone(), anchor))?;
    let index = match side {
        Side::Before => index,
        Side::After => index + 1,
    };

    let count = tokens.len();
    owner.splice(index, tokens)?;
    debug!(grammar = %root, anchor, ?side, count, "Inserted tokens");
    Ok(())
}
