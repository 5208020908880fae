//! A single regex-driven matching rule.

use std::fmt;
use std::sync::Arc;

use onig::{Regex, RegexOptions, Region, SearchOptions, Syntax};

use super::Grammar;
use crate::base::Name;
use crate::error::{GrammarError, Result};

/// Regex flags fixed when a [`Pattern`] is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PatternFlags {
    /// Match letters regardless of case.
    pub case_insensitive: bool,
    /// `^` and `$` anchor at line boundaries instead of the haystack edges.
    pub multiline: bool,
    /// `.` also matches newlines.
    pub dot_all: bool,
}

impl PatternFlags {
    fn regex_options(&self) -> RegexOptions {
        let mut options = RegexOptions::REGEX_OPTION_NONE;
        if self.case_insensitive {
            options |= RegexOptions::REGEX_OPTION_IGNORECASE;
        }
        if !self.multiline {
            options |= RegexOptions::REGEX_OPTION_SINGLELINE;
        }
        if self.dot_all {
            // Oniguruma's "multiline" is dot-matches-newline.
            options |= RegexOptions::REGEX_OPTION_MULTILINE;
        }
        options
    }
}

/// Byte offsets of one match inside a haystack.
///
/// `context_end` equals `start` unless the pattern emulates lookbehind, in
/// which case `start..context_end` is the discarded context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PatternMatch {
    pub start: usize,
    pub context_end: usize,
    pub end: usize,
}

impl PatternMatch {
    /// The span that becomes the emitted token.
    pub fn is_emittable(&self) -> bool {
        self.end > self.context_end
    }
}

/// A single matching rule of a [`Token`](super::Token).
///
/// Clones share the compiled matcher; everything else, including the nested
/// inside grammar, is copied.
#[derive(Clone)]
pub struct Pattern {
    matcher: Arc<Regex>,
    source: String,
    flags: PatternFlags,
    lookbehind: bool,
    global: bool,
    alias: Option<Name>,
    inside: Option<Box<Grammar>>,
}

impl Pattern {
    /// Compile a plain pattern with default flags.
    pub fn new(source: impl Into<String>) -> Result<Self> {
        Self::builder(source).build()
    }

    /// Start building a pattern with options.
    pub fn builder(source: impl Into<String>) -> PatternBuilder {
        PatternBuilder::new(source)
    }

    /// The regex source this pattern was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Whether the first capture group is discarded context.
    pub fn is_lookbehind(&self) -> bool {
        self.lookbehind
    }

    /// Whether the pattern greedily repeats before ceding priority.
    pub fn is_global(&self) -> bool {
        self.global
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Grammar used to tokenize this pattern's matches recursively.
    pub fn inside(&self) -> Option<&Grammar> {
        self.inside.as_deref()
    }

    pub fn inside_mut(&mut self) -> Option<&mut Grammar> {
        self.inside.as_deref_mut()
    }

    /// Find the leftmost match starting at or after `from`.
    ///
    /// The whole haystack stays visible to the matcher, so word boundaries and
    /// lookarounds see the text surrounding `from`.
    pub(crate) fn find_from(
        &self,
        haystack: &str,
        from: usize,
        region: &mut Region,
    ) -> Option<PatternMatch> {
        region.clear();
        self.matcher.search_with_options(
            haystack,
            from,
            haystack.len(),
            SearchOptions::SEARCH_OPTION_NONE,
            Some(region),
        )?;
        let (start, end) = region.pos(0)?;
        let context_end = if self.lookbehind {
            region
                .pos(1)
                .map(|(_, group_end)| group_end.clamp(start, end))
                .unwrap_or(start)
        } else {
            start
        };
        Some(PatternMatch {
            start,
            context_end,
            end,
        })
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("flags", &self.flags)
            .field("lookbehind", &self.lookbehind)
            .field("global", &self.global)
            .field("alias", &self.alias)
            .field("inside", &self.inside.as_ref().map(|g| g.name()))
            .finish()
    }
}

/// Builder for [`Pattern`]s with options.
#[derive(Debug, Clone)]
pub struct PatternBuilder {
    source: String,
    flags: PatternFlags,
    lookbehind: bool,
    global: bool,
    alias: Option<Name>,
    inside: Option<Grammar>,
}

impl PatternBuilder {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            flags: PatternFlags::default(),
            lookbehind: false,
            global: false,
            alias: None,
            inside: None,
        }
    }

    pub fn case_insensitive(mut self) -> Self {
        self.flags.case_insensitive = true;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.flags.multiline = true;
        self
    }

    pub fn dot_all(mut self) -> Self {
        self.flags.dot_all = true;
        self
    }

    /// Replace all flags at once.
    pub fn flags(mut self, flags: PatternFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Treat the first capture group as context to discard.
    ///
    /// The discarded context runs from the match start to the end of group 1,
    /// so group 1 should open the regex (`(^|[^\\])//.*`). Text matched before
    /// a non-leading group 1 is discarded along with it.
    pub fn lookbehind(mut self) -> Self {
        self.lookbehind = true;
        self
    }

    pub fn global(mut self) -> Self {
        self.global = true;
        self
    }

    pub fn alias(mut self, alias: impl Into<Name>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn inside(mut self, grammar: Grammar) -> Self {
        self.inside = Some(grammar);
        self
    }

    /// Compile the regex and validate the options against it.
    pub fn build(self) -> Result<Pattern> {
        let matcher =
            Regex::with_options(&self.source, self.flags.regex_options(), Syntax::ruby())
                .map_err(|err| GrammarError::invalid_pattern(&self.source, err.to_string()))?;

        if self.lookbehind && matcher.captures_len() == 0 {
            return Err(GrammarError::invalid_pattern(
                &self.source,
                "lookbehind requires a capture group holding the context",
            ));
        }

        Ok(Pattern {
            matcher: Arc::new(matcher),
            source: self.source,
            flags: self.flags,
            lookbehind: self.lookbehind,
            global: self.global,
            alias: self.alias,
            inside: self.inside.map(Box::new),
        })
    }
}
