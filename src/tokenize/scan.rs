//! The matching engine.
//!
//! Position-major scan: at each cursor the grammar's patterns are tried in
//! priority order and the first one matching exactly at the cursor wins. A
//! cursor no pattern matches at contributes one character to a literal run.
//!
//! Patterns are not re-run at every position. Each pattern keeps the result
//! of its last forward search in a [`Slot`]: a match found at `q` answers
//! every query for cursors up to `q`, and "no match from `p`" answers every
//! later query. A pattern is searched again only once the cursor has moved
//! past its cached match.

use onig::Region;

use crate::base::{Name, text_range};
use crate::grammar::{Grammar, Pattern, PatternMatch, Token};

use super::{MatchedToken, TokenNode};

/// Cached forward-search state of one pattern.
#[derive(Debug, Clone, Copy)]
enum Slot {
    /// Not searched yet.
    Unknown,
    /// Next match at or after the last search position.
    Next(PatternMatch),
    /// No match anywhere after the last search position.
    Exhausted,
}

pub(super) struct Scanner<'g, 'a> {
    text: &'a str,
    /// Absolute offset of `text` within the root input.
    base: usize,
    rules: Vec<(&'g Token, &'g Pattern)>,
    slots: Vec<Slot>,
    region: Region,
    nodes: Vec<TokenNode<'a>>,
}

impl<'g, 'a> Scanner<'g, 'a> {
    pub(super) fn new(grammar: &'g Grammar, text: &'a str, base: usize) -> Self {
        let rules: Vec<_> = grammar
            .tokens()
            .flat_map(|token| token.patterns().iter().map(move |pattern| (token, pattern)))
            .collect();
        Self {
            text,
            base,
            slots: vec![Slot::Unknown; rules.len()],
            rules,
            region: Region::new(),
            nodes: Vec::new(),
        }
    }

    pub(super) fn run(mut self) -> Vec<TokenNode<'a>> {
        let mut cursor = 0;
        'scan: while cursor < self.text.len() {
            for rule in 0..self.rules.len() {
                let Some(hit) = self.match_at(rule, cursor) else {
                    continue;
                };
                cursor = self.emit(rule, hit);
                if self.rules[rule].1.is_global() {
                    while let Some(hit) = self.match_at(rule, cursor) {
                        cursor = self.emit(rule, hit);
                    }
                }
                continue 'scan;
            }

            let width = self.text[cursor..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.push_literal(cursor, cursor + width);
            cursor += width;
        }
        self.nodes
    }

    /// The match of `rule` starting exactly at `cursor`, if it emits text.
    fn match_at(&mut self, rule: usize, cursor: usize) -> Option<PatternMatch> {
        let hit = match self.slots[rule] {
            Slot::Exhausted => return None,
            Slot::Next(hit) if hit.start >= cursor => hit,
            Slot::Next(_) | Slot::Unknown => {
                let (_, pattern) = self.rules[rule];
                match pattern.find_from(self.text, cursor, &mut self.region) {
                    Some(hit) => {
                        self.slots[rule] = Slot::Next(hit);
                        hit
                    }
                    None => {
                        self.slots[rule] = Slot::Exhausted;
                        return None;
                    }
                }
            }
        };
        // Zero-length (or context-only) matches would stall the cursor.
        (hit.start == cursor && hit.is_emittable()).then_some(hit)
    }

    /// Emit the token for `hit` and return the cursor after it.
    fn emit(&mut self, rule: usize, hit: PatternMatch) -> usize {
        let (token, pattern) = self.rules[rule];
        if hit.context_end > hit.start {
            self.push_literal(hit.start, hit.context_end);
        }

        let text = &self.text[hit.context_end..hit.end];
        let children = match pattern.inside() {
            Some(inside) => Scanner::new(inside, text, self.base + hit.context_end).run(),
            None => Vec::new(),
        };

        self.nodes.push(TokenNode::Matched(MatchedToken {
            name: Name::new(token.name()),
            alias: pattern.alias().map(Name::new),
            text,
            range: text_range(self.base + hit.context_end, self.base + hit.end),
            children,
        }));
        hit.end
    }

    /// Append `start..end` as literal text, merging with a preceding literal.
    fn push_literal(&mut self, start: usize, end: usize) {
        if let Some(TokenNode::Literal { text, range }) = self.nodes.last_mut() {
            let previous_start = usize::from(range.start()) - self.base;
            if previous_start + text.len() == start {
                *text = &self.text[previous_start..end];
                *range = text_range(self.base + previous_start, self.base + end);
                return;
            }
        }
        self.nodes.push(TokenNode::Literal {
            text: &self.text[start..end],
            range: text_range(self.base + start, self.base + end),
        });
    }
}
