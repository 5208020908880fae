use crate::compose::find_inside_mut;
use crate::error::{GrammarError, Result};
use crate::grammar::{Grammar, Pattern, Token};

pub(super) fn create() -> Result<Grammar> {
    let atrule_inside = Grammar::new("inside", [Token::single("rule", Pattern::new(r"@[\w-]+")?)])?;

    let mut css = Grammar::new(
        "css",
        [
            Token::single("comment", Pattern::new(r"/\*[\s\S]*?\*/")?),
            Token::single(
                "atrule",
                Pattern::builder(r"@[\w-]+?.*?(?:;|(?=\s*\{))")
                    .case_insensitive()
                    .inside(atrule_inside)
                    .build()?,
            ),
            Token::single(
                "url",
                Pattern::builder(r#"url\((?:(["'])(?:\\(?:\r\n|[\s\S])|(?!\1)[^\\\r\n])*\1|.*?)\)"#)
                    .case_insensitive()
                    .build()?,
            ),
            Token::single("selector", Pattern::new(r"[^{}\s][^{};]*?(?=\s*\{)")?),
            Token::single(
                "string",
                Pattern::builder(r#"("|')(?:\\(?:\r\n|[\s\S])|(?!\1)[^\\\r\n])*\1"#)
                    .global()
                    .build()?,
            ),
            Token::single(
                "property",
                Pattern::builder(r"[-_a-z\x{A0}-\x{FFFF}][-\w\x{A0}-\x{FFFF}]*(?=\s*:)")
                    .case_insensitive()
                    .build()?,
            ),
            Token::single(
                "important",
                Pattern::builder(r"\B!important\b")
                    .case_insensitive()
                    .build()?,
            ),
            Token::single(
                "function",
                Pattern::builder(r"[-a-z0-9]+(?=\()")
                    .case_insensitive()
                    .build()?,
            ),
            Token::single("punctuation", Pattern::new(r"[(){};:]")?),
        ],
    )?;

    // at-rule bodies are highlighted with the rest of the stylesheet tokens
    let rest: Vec<Token> = css
        .tokens()
        .filter(|token| token.name() != "atrule")
        .cloned()
        .collect();
    let inside = find_inside_mut(&mut css, "atrule")
        .ok_or_else(|| GrammarError::token_not_found("css", "atrule"))?;
    for token in rest {
        inside.push(token)?;
    }

    Ok(css)
}
