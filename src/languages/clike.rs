//! Base grammar shared by C-family languages.

use crate::error::Result;
use crate::grammar::{Grammar, Pattern, Token};

pub(super) fn create() -> Result<Grammar> {
    let class_name_inside = Grammar::new(
        "inside",
        [Token::single("punctuation", Pattern::new(r"[.\\]")?)],
    )?;

    Grammar::new(
        "clike",
        [
            Token::new(
                "comment",
                [
                    Pattern::builder(r"(^|[^\\])/\*[\s\S]*?(?:\*/|$)")
                        .lookbehind()
                        .build()?,
                    Pattern::builder(r"(^|[^\\:])//.*").lookbehind().build()?,
                ],
            )?,
            Token::single(
                "string",
                Pattern::builder(r#"(["'])(?:\\(?:\r\n|[\s\S])|(?!\1)[^\\\r\n])*\1"#)
                    .global()
                    .build()?,
            ),
            Token::single(
                "class-name",
                Pattern::builder(
                    r"((?:\b(?:class|interface|extends|implements|trait|instanceof|new)\s+)|(?:catch\s+\())[\w.\\]+",
                )
                .case_insensitive()
                .lookbehind()
                .inside(class_name_inside)
                .build()?,
            ),
            Token::single(
                "keyword",
                Pattern::new(
                    r"\b(?:if|else|while|do|for|return|in|instanceof|function|new|try|throw|catch|finally|null|break|continue)\b",
                )?,
            ),
            Token::single("boolean", Pattern::new(r"\b(?:true|false)\b")?),
            Token::single(
                "function",
                Pattern::builder(r"[a-z0-9_]+(?=\()")
                    .case_insensitive()
                    .build()?,
            ),
            Token::single(
                "number",
                Pattern::builder(r"\b0x[\da-f]+\b|(?:\b\d+\.?\d*|\B\.\d+)(?:e[+-]?\d+)?")
                    .case_insensitive()
                    .build()?,
            ),
            Token::single(
                "operator",
                Pattern::new(r"--?|\+\+?|!=?=?|<=?|>=?|==?=?|&&?|\|\|?|\?|\*|/|~|\^|%")?,
            ),
            Token::single("punctuation", Pattern::new(r"[{}\[\];(),.:]")?),
        ],
    )
}
