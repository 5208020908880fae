//! Lazy grammar providers.

use super::GrammarRegistry;
use crate::error::Result;
use crate::grammar::Grammar;

/// Builds grammars on demand for a [`GrammarRegistry`].
///
/// A locator may call back into the registry (for instance to `require` the
/// base of a derived grammar); the registry holds no lock while it runs.
pub trait GrammarLocator: Send + Sync {
    /// Build the grammar called `name`, or `None` if this locator does not
    /// know it.
    fn grammar(&self, registry: &GrammarRegistry, name: &str) -> Option<Result<Grammar>>;

    /// Every name [`grammar`](GrammarLocator::grammar) can build.
    fn languages(&self) -> Vec<&'static str>;

    /// Canonical name for an alternative name, e.g. `jsonp` → `json`.
    fn alias_of(&self, _name: &str) -> Option<&'static str> {
        None
    }
}
