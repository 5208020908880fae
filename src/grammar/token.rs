//! Named group of patterns.

use super::Pattern;
use crate::base::Name;
use crate::error::{GrammarError, Result};

/// A named, ordered list of [`Pattern`]s tried in order.
#[derive(Debug, Clone)]
pub struct Token {
    name: Name,
    patterns: Vec<Pattern>,
}

impl Token {
    /// Create a token; at least one pattern is required.
    pub fn new(
        name: impl Into<Name>,
        patterns: impl IntoIterator<Item = Pattern>,
    ) -> Result<Self> {
        let name = name.into();
        let patterns: Vec<Pattern> = patterns.into_iter().collect();
        if patterns.is_empty() {
            return Err(GrammarError::EmptyToken { token: name });
        }
        Ok(Self { name, patterns })
    }

    /// Create a token with exactly one pattern.
    pub fn single(name: impl Into<Name>, pattern: Pattern) -> Self {
        Self {
            name: name.into(),
            patterns: vec![pattern],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_key(&self) -> &Name {
        &self.name
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Mutable access for grammars still under construction.
    ///
    /// The list itself can only grow through [`push_pattern`](Self::push_pattern)
    /// or be swapped whole through [`replace_patterns`](Self::replace_patterns),
    /// so a token never ends up without patterns.
    pub fn patterns_mut(&mut self) -> &mut [Pattern] {
        &mut self.patterns
    }

    /// Append a pattern with the lowest priority within this token.
    pub fn push_pattern(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
    }

    /// Discard every pattern and install `patterns` instead.
    pub fn replace_patterns(
        &mut self,
        patterns: impl IntoIterator<Item = Pattern>,
    ) -> Result<()> {
        let patterns: Vec<Pattern> = patterns.into_iter().collect();
        if patterns.is_empty() {
            return Err(GrammarError::EmptyToken {
                token: self.name.clone(),
            });
        }
        self.patterns = patterns;
        Ok(())
    }
}
