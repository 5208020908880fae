use crate::compose::{extend, insert_before_token};
use crate::error::Result;
use crate::grammar::{Grammar, Pattern, Token};
use crate::registry::GrammarRegistry;

pub(super) fn create(registry: &GrammarRegistry) -> Result<Grammar> {
    let keyword = Token::single(
        "keyword",
        Pattern::new(
            r"\b(?:abstract|continue|for|new|switch|assert|default|goto|package|synchronized|boolean|do|if|private|this|break|double|implements|protected|throw|byte|else|import|public|throws|case|enum|instanceof|return|transient|catch|extends|int|short|try|char|final|interface|static|void|class|finally|long|strictfp|volatile|const|float|native|super|while)\b",
        )?,
    );

    let mut java = extend(
        registry,
        "clike",
        "java",
        [
            keyword.clone(),
            Token::single(
                "number",
                Pattern::builder(
                    r"\b0b[01]+\b|\b0x[\da-f]*\.?[\da-fp-]+\b|(?:\b\d+\.?\d*|\B\.\d+)(?:e[+-]?\d+)?[df]?",
                )
                .case_insensitive()
                .build()?,
            ),
            Token::single(
                "operator",
                Pattern::builder(
                    r"(^|[^.])(?:\+[+=]?|-[-=]?|!=?|<<?=?|>>?>?=?|==?|&[&=]?|\|[|=]?|\*=?|/=?|%=?|\^=?|[?:~])",
                )
                .multiline()
                .lookbehind()
                .build()?,
            ),
        ],
    )?;

    insert_before_token(
        &mut java,
        "function",
        [Token::single(
            "annotation",
            Pattern::builder(r"(^|[^.])@\w+")
                .lookbehind()
                .alias("punctuation")
                .build()?,
        )],
    )?;

    let generics_inside = Grammar::new(
        "inside",
        [keyword, Token::single("punctuation", Pattern::new(r"[<>(),.:]")?)],
    )?;
    insert_before_token(
        &mut java,
        "class-name",
        [Token::single(
            "generics",
            Pattern::builder(r"<\s*\w+(?:\.\w+)?(?:\s*,\s*\w+(?:\.\w+)?)*>")
                .case_insensitive()
                .alias("function")
                .inside(generics_inside)
                .build()?,
        )],
    )?;

    Ok(java)
}
