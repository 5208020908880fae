//! Grammar composition.
//!
//! Operations that build a grammar out of another one:
//! - [`extend`], [`extend_filtered`], [`derive`] - snapshot a base grammar,
//!   optionally drop tokens, then override or append tokens
//! - [`insert_before_token`], [`insert_after_token`] - splice tokens next to an
//!   anchor, which sets their match priority relative to it
//! - [`filter_tokens`] - drop tokens failing a predicate
//! - [`find_token`], [`find_inside_mut`], [`replace_patterns`] - locate a token
//!   (possibly nested) and rewrite its rule
//!
//! Inheritance is copy-on-derive: a derived grammar holds its own flat token
//! list and never delegates to its parent at match time.
//!
//! ## Paths
//!
//! Lookups take `/`-separated paths. Every segment but the last names a
//! token whose first pattern with an inside grammar is descended into:
//!
//! ```text
//! "selector"               → token `selector` of the grammar
//! "selector/pseudo-class"  → token `pseudo-class` of selector's inside grammar
//! ```
//!
//! Mutating operations take `&mut Grammar`, so they can only run on a grammar
//! the caller still owns, never on one already published to a registry.

mod extend;
mod insert;
mod locate;

pub use extend::{derive, extend, extend_filtered, filter_tokens};
pub use insert::{insert_after_token, insert_before_token};
pub use locate::{find_inside, find_inside_mut, find_token, find_token_mut, replace_patterns};
