use crate::error::Result;
use crate::grammar::{Grammar, Pattern, Token};

pub(super) fn create() -> Result<Grammar> {
    Grammar::new(
        "brainfuck",
        [
            Token::single("pointer", Pattern::builder("<|>").alias("keyword").build()?),
            Token::single("increment", Pattern::builder(r"\+").alias("inserted").build()?),
            Token::single("decrement", Pattern::builder("-").alias("deleted").build()?),
            Token::single("branching", Pattern::builder(r"\[|\]").alias("important").build()?),
            Token::single("operator", Pattern::new("[.,]")?),
            Token::single("comment", Pattern::new(r"\S+")?),
        ],
    )
}
