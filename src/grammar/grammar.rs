//! Named, ordered set of tokens.

use indexmap::IndexMap;

use super::Token;
use crate::base::Name;
use crate::error::{GrammarError, Result};

/// An ordered list of [`Token`]s defining how to tokenize one language.
///
/// Token order is match priority. Names are unique within the top-level
/// list; nested inside grammars have their own namespace. Cloning performs a
/// deep copy, so a derived grammar never aliases its parent's tokens.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub(crate) name: Name,
    /// Tokens by name (IndexMap preserves priority order).
    pub(crate) tokens: IndexMap<Name, Token>,
    pub(crate) parent: Option<Name>,
}

impl Grammar {
    /// Build a grammar from a flat token list; names must be distinct.
    pub fn new(name: impl Into<Name>, tokens: impl IntoIterator<Item = Token>) -> Result<Self> {
        let mut grammar = Self::empty(name);
        for token in tokens {
            grammar.push(token)?;
        }
        Ok(grammar)
    }

    /// A grammar with no tokens; every input tokenizes to one literal.
    pub fn empty(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            tokens: IndexMap::new(),
            parent: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the grammar this one was derived from.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Tokens in priority order.
    pub fn tokens(&self) -> impl ExactSizeIterator<Item = &Token> + '_ {
        self.tokens.values()
    }

    pub fn token_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.tokens.keys().map(|name| name.as_str())
    }

    pub fn token(&self, name: &str) -> Option<&Token> {
        self.tokens.get(name)
    }

    pub fn token_mut(&mut self, name: &str) -> Option<&mut Token> {
        self.tokens.get_mut(name)
    }

    /// Priority index of the named token.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.tokens.get_index_of(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append a token with the lowest priority.
    pub(crate) fn push(&mut self, token: Token) -> Result<()> {
        if self.tokens.contains_key(token.name()) {
            return Err(GrammarError::duplicate_token(self.name.clone(), token.name()));
        }
        self.tokens.insert(token.name_key().clone(), token);
        Ok(())
    }

    /// Replace the patterns of a same-named token in place, or append.
    pub(crate) fn upsert(&mut self, token: Token) {
        match self.tokens.get_mut(token.name()) {
            Some(existing) => *existing = token,
            None => {
                self.tokens.insert(token.name_key().clone(), token);
            }
        }
    }

    /// Splice `tokens` in at `index`, keeping their relative order.
    ///
    /// Fails without modifying the grammar if any name is already taken.
    pub(crate) fn splice(&mut self, index: usize, tokens: Vec<Token>) -> Result<()> {
        for (i, token) in tokens.iter().enumerate() {
            let repeated = tokens[..i].iter().any(|t| t.name() == token.name());
            if repeated || self.tokens.contains_key(token.name()) {
                return Err(GrammarError::duplicate_token(self.name.clone(), token.name()));
            }
        }
        for (offset, token) in tokens.into_iter().enumerate() {
            self.tokens
                .shift_insert(index + offset, token.name_key().clone(), token);
        }
        Ok(())
    }
}
