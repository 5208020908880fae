use crate::compose::{extend_filtered, insert_before_token};
use crate::error::Result;
use crate::grammar::{Grammar, Pattern, Token};
use crate::registry::GrammarRegistry;

pub(super) fn create(registry: &GrammarRegistry) -> Result<Grammar> {
    let mut go = extend_filtered(
        registry,
        "clike",
        "go",
        |token| token.name() != "class-name",
        [
            Token::single(
                "keyword",
                Pattern::new(
                    r"\b(?:break|case|chan|const|continue|default|defer|else|fallthrough|for|func|go(?:to)?|if|import|interface|map|package|range|return|select|struct|switch|type|var)\b",
                )?,
            ),
            Token::single("boolean", Pattern::new(r"\b(?:_|iota|nil|true|false)\b")?),
            Token::single(
                "operator",
                Pattern::new(
                    r"[*/%^!=]=?|\+[=+]?|-[=-]?|\|[=|]?|&(?:=|&|\^=?)?|>(?:>=?|=)?|<(?:<=?|=|-)?|:=|\.\.\.",
                )?,
            ),
            Token::single(
                "number",
                Pattern::builder(r"(?:\b0x[a-f\d]+|(?:\b\d+\.?\d*|\B\.\d+)(?:e[-+]?\d+)?)i?")
                    .case_insensitive()
                    .build()?,
            ),
            Token::single(
                "string",
                Pattern::builder(r#"(["'`])(\\[\s\S]|(?!\1)[^\\])*\1"#)
                    .global()
                    .build()?,
            ),
        ],
    )?;

    // clike has no builtin
    insert_before_token(
        &mut go,
        "boolean",
        [Token::single(
            "builtin",
            Pattern::new(
                r"\b(?:bool|byte|complex(?:64|128)|error|float(?:32|64)|rune|string|u?int(?:8|16|32|64)?|uintptr|append|cap|close|complex|copy|delete|imag|len|make|new|panic|print(?:ln)?|real|recover)\b",
            )?,
        )],
    )?;

    Ok(go)
}
