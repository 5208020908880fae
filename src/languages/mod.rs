//! Bundled grammar tables.
//!
//! Each submodule builds one grammar. Derived languages are composed from
//! their base with [`crate::compose`] at load time:
//!
//! ```text
//! clike ─┬─ go     (drops class-name, adds builtin before boolean)
//!        ├─ java   (adds annotation before function, generics before class-name)
//!        └─ dart   (adds metadata before function)
//! css    ── css_extras (selector sub-grammar, hexcode/entity/number before function)
//! json, brainfuck
//! ```
//!
//! [`BundledGrammars`] exposes them to a [`GrammarRegistry`] lazily.

mod brainfuck;
mod clike;
mod css;
mod css_extras;
mod dart;
mod go;
mod java;
mod json;

use crate::error::Result;
use crate::grammar::Grammar;
use crate::registry::{GrammarLocator, GrammarRegistry};

const LANGUAGES: &[&str] = &["brainfuck", "clike", "css", "dart", "go", "java", "json"];

/// Locator for the bundled grammar tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledGrammars;

impl BundledGrammars {
    /// A fresh registry backed by the bundled grammars.
    pub fn registry() -> GrammarRegistry {
        GrammarRegistry::with_locator(Self)
    }
}

impl GrammarLocator for BundledGrammars {
    fn grammar(&self, registry: &GrammarRegistry, name: &str) -> Option<Result<Grammar>> {
        let grammar = match name {
            "brainfuck" => brainfuck::create(),
            "clike" => clike::create(),
            "css" => css::create().and_then(|mut css| {
                css_extras::modify(&mut css)?;
                Ok(css)
            }),
            "dart" => dart::create(registry),
            "go" => go::create(registry),
            "java" => java::create(registry),
            "json" => json::create(),
            _ => return None,
        };
        Some(grammar)
    }

    fn languages(&self) -> Vec<&'static str> {
        LANGUAGES.to_vec()
    }

    fn alias_of(&self, name: &str) -> Option<&'static str> {
        match name {
            "jsonp" => Some("json"),
            _ => None,
        }
    }
}
