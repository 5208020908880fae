use crate::error::Result;
use crate::grammar::{Grammar, Pattern, Token};

pub(super) fn create() -> Result<Grammar> {
    Grammar::new(
        "json",
        [
            Token::single(
                "property",
                Pattern::builder(r#""(?:\\.|[^\\"\r\n])*"(?=\s*:)"#)
                    .case_insensitive()
                    .build()?,
            ),
            Token::single(
                "string",
                Pattern::builder(r#""(?:\\.|[^\\"\r\n])*"(?!\s*:)"#)
                    .global()
                    .build()?,
            ),
            Token::single(
                "number",
                Pattern::new(r"\b0x[\dA-Fa-f]+\b|(?:\b\d+\.?\d*|\B\.\d+)(?:[Ee][+-]?\d+)?")?,
            ),
            Token::single("punctuation", Pattern::new(r"[{}\[\]);,]")?),
            Token::single("operator", Pattern::new(":")?),
            Token::single(
                "boolean",
                Pattern::builder(r"\b(?:true|false)\b")
                    .case_insensitive()
                    .build()?,
            ),
            Token::single(
                "null",
                Pattern::builder(r"\bnull\b").case_insensitive().build()?,
            ),
        ],
    )
}
