use crate::compose::{extend, insert_before_token};
use crate::error::Result;
use crate::grammar::{Grammar, Pattern, Token};
use crate::registry::GrammarRegistry;

pub(super) fn create(registry: &GrammarRegistry) -> Result<Grammar> {
    let mut dart = extend(
        registry,
        "clike",
        "dart",
        [
            Token::new(
                "string",
                [
                    Pattern::builder(r#"r?("""|''')[\s\S]*?\1"#).global().build()?,
                    Pattern::builder(r#"r?("|')(?:\\.|(?!\1)[^\\\r\n])*\1"#)
                        .global()
                        .build()?,
                ],
            )?,
            Token::new(
                "keyword",
                [
                    Pattern::new(r"\b(?:async|sync|yield)\*")?,
                    Pattern::new(
                        r"\b(?:abstract|assert|async|await|break|case|catch|class|const|continue|default|deferred|do|dynamic|else|enum|export|external|extends|factory|final|finally|for|get|if|implements|import|in|library|new|null|operator|part|rethrow|return|set|static|super|switch|this|throw|try|typedef|var|void|while|with|yield)\b",
                    )?,
                ],
            )?,
            Token::single(
                "operator",
                Pattern::new(
                    r"\bis!|\b(?:as|is)\b|\+\+|--|&&|\|\||<<=?|>>=?|~(?:/=?)?|[+\-*/%&^|=!<>]=?|\?",
                )?,
            ),
        ],
    )?;

    insert_before_token(
        &mut dart,
        "function",
        [Token::single(
            "metadata",
            Pattern::builder(r"@\w+").alias("symbol").build()?,
        )],
    )?;

    Ok(dart)
}
