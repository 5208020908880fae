//! Richer selector and value highlighting layered onto `css`.

use crate::compose::{insert_before_token, replace_patterns};
use crate::error::Result;
use crate::grammar::{Grammar, Pattern, Token};

/// Rewrite a `css` grammar that is still under construction.
pub(super) fn modify(css: &mut Grammar) -> Result<()> {
    let selector_inside = Grammar::new(
        "inside",
        [
            Token::single(
                "pseudo-element",
                Pattern::new(r":(?:after|before|first-letter|first-line|selection)|::[-\w]+")?,
            ),
            Token::single("pseudo-class", Pattern::new(r":[-\w]+(?:\(.*\))?")?),
            Token::single("class", Pattern::new(r"\.[-:.\w]+")?),
            Token::single("id", Pattern::new(r"#[-:.\w]+")?),
            Token::single("attribute", Pattern::new(r"\[[^\]]+\]")?),
        ],
    )?;
    replace_patterns(
        css,
        "selector",
        [Pattern::builder(r"[^{}\s][^{}]*(?=\s*\{)")
            .inside(selector_inside)
            .build()?],
    )?;

    insert_before_token(
        css,
        "function",
        [
            Token::single(
                "hexcode",
                Pattern::builder(r"#[\da-f]{3,8}").case_insensitive().build()?,
            ),
            Token::single(
                "entity",
                Pattern::builder(r"\\[\da-f]{1,8}").case_insensitive().build()?,
            ),
            Token::single("number", Pattern::new(r"[\d%.]+")?),
        ],
    )
}
