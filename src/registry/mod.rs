//! Grammar registry.
//!
//! A caller-owned store mapping grammar names to published grammars. Several
//! independent registries can coexist (one per test, say); nothing here is
//! process-global.
//!
//! Published grammars sit behind an `Arc` and are never mutated. The store is
//! guarded by a `RwLock`: lookups take the read side, registration the write
//! side, and no lock is held while a [`GrammarLocator`] builds a grammar.

mod locator;

pub use locator::GrammarLocator;

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::base::Name;
use crate::error::{GrammarError, Result};
use crate::grammar::{Grammar, Token};
use crate::tokenize::{self, TokenNode};

/// Name → grammar store, optionally backed by a lazy [`GrammarLocator`].
#[derive(Default)]
pub struct GrammarRegistry {
    grammars: RwLock<FxHashMap<Name, Arc<Grammar>>>,
    /// Alternative name -> canonical name.
    aliases: RwLock<FxHashMap<Name, Name>>,
    locator: Option<Box<dyn GrammarLocator>>,
}

impl GrammarRegistry {
    /// Create an empty registry without a locator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry that asks `locator` for unknown names.
    pub fn with_locator(locator: impl GrammarLocator + 'static) -> Self {
        Self {
            locator: Some(Box::new(locator)),
            ..Self::default()
        }
    }

    /// Build a grammar from `tokens` and publish it.
    pub fn define(
        &self,
        name: impl Into<Name>,
        tokens: impl IntoIterator<Item = Token>,
    ) -> Result<Arc<Grammar>> {
        let grammar = Grammar::new(name, tokens)?;
        Ok(self.register(grammar))
    }

    /// Publish a grammar under its own name.
    ///
    /// Re-registering a name replaces the entry; readers holding the previous
    /// `Arc` keep seeing the old grammar.
    pub fn register(&self, grammar: Grammar) -> Arc<Grammar> {
        let name = grammar.name.clone();
        let grammar = Arc::new(grammar);
        let previous = self.grammars.write().insert(name.clone(), Arc::clone(&grammar));
        if previous.is_some() {
            warn!(grammar = %name, "Replaced registered grammar");
        } else {
            debug!(grammar = %name, tokens = grammar.len(), "Registered grammar");
        }
        grammar
    }

    /// Make `alias` resolve to `target`.
    pub fn alias(&self, alias: impl Into<Name>, target: impl Into<Name>) {
        let (alias, target) = (alias.into(), target.into());
        debug!(alias = %alias, target = %target, "Registered grammar alias");
        self.aliases.write().insert(alias, target);
    }

    /// Look up a grammar, asking the locator on a miss.
    ///
    /// Locator failures are logged and reported as `None`; use
    /// [`require`](Self::require) to observe them.
    pub fn get(&self, name: &str) -> Option<Arc<Grammar>> {
        match self.require(name) {
            Ok(grammar) => Some(grammar),
            Err(GrammarError::UnknownGrammar(_)) => None,
            Err(err) => {
                warn!(grammar = name, error = %err, "Grammar locator failed");
                None
            }
        }
    }

    /// Look up a grammar, asking the locator on a miss.
    ///
    /// A name published in this registry always wins over an alias of the
    /// same spelling.
    pub fn require(&self, name: &str) -> Result<Arc<Grammar>> {
        if let Some(grammar) = self.cached(name) {
            return Ok(grammar);
        }
        let name = self.canonical(name);
        if let Some(grammar) = self.cached(&name) {
            return Ok(grammar);
        }

        let Some(locator) = &self.locator else {
            return Err(GrammarError::UnknownGrammar(name));
        };
        match locator.grammar(self, &name) {
            Some(Ok(grammar)) => {
                debug!(
                    grammar = %name,
                    built = grammar.name(),
                    "Loaded grammar from locator"
                );
                Ok(self.publish_located(name, grammar))
            }
            Some(Err(err)) => Err(err),
            None => Err(GrammarError::UnknownGrammar(name)),
        }
    }

    /// Load every grammar the locator knows.
    ///
    /// Call during initialization to make the registry read-only afterwards.
    pub fn load_all(&self) -> Result<()> {
        if let Some(locator) = &self.locator {
            for name in locator.languages() {
                self.require(name)?;
            }
        }
        Ok(())
    }

    /// Whether `name` (or the grammar it aliases) is already published.
    pub fn contains(&self, name: &str) -> bool {
        let canonical = self.canonical(name);
        let grammars = self.grammars.read();
        grammars.contains_key(name) || grammars.contains_key(&canonical)
    }

    /// Published grammar names, sorted.
    pub fn names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = self.grammars.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.grammars.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammars.read().is_empty()
    }

    /// Tokenize `text` with the grammar called `name`.
    pub fn tokenize<'a>(&self, name: &str, text: &'a str) -> Result<Vec<TokenNode<'a>>> {
        let grammar = self.require(name)?;
        Ok(tokenize::tokenize(&grammar, text))
    }

    fn canonical(&self, name: &str) -> Name {
        if let Some(target) = self.aliases.read().get(name) {
            return target.clone();
        }
        self.locator
            .as_ref()
            .and_then(|locator| locator.alias_of(name))
            .map_or_else(|| Name::new(name), Name::new_static)
    }

    fn cached(&self, name: &str) -> Option<Arc<Grammar>> {
        self.grammars.read().get(name).cloned()
    }

    /// Insert a located grammar under the name it was requested by, unless
    /// another caller got there first.
    fn publish_located(&self, name: Name, grammar: Grammar) -> Arc<Grammar> {
        let mut grammars = self.grammars.write();
        let entry = grammars.entry(name).or_insert_with(|| Arc::new(grammar));
        Arc::clone(entry)
    }
}

impl fmt::Debug for GrammarRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrammarRegistry")
            .field("grammars", &self.names())
            .field("aliases", &self.aliases.read().len())
            .field("locator", &self.locator.is_some())
            .finish()
    }
}
