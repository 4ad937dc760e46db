use crate::{
    common::{error::CompileError, position::SrcPos},
    test::utils::{compile_until_lexer, token_summaries},
};
use anyhow::Result;

fn lit(s: &str) -> Option<String> {
    Some(String::from(s))
}

#[test]
fn empty() -> Result<()> {
    let tokens = compile_until_lexer("")?;
    assert!(tokens.is_empty());

    let tokens = compile_until_lexer("  \n\n ")?;
    assert!(tokens.is_empty());
    Ok(())
}

#[test]
fn statement_tokens() -> Result<()> {
    let tokens = compile_until_lexer("let x = 5;")?;
    assert_eq!(
        token_summaries(&tokens),
        vec![
            ("let".into(), 1, 1, None),
            ("identifier".into(), 1, 5, lit("x")),
            ("`=`".into(), 1, 7, None),
            ("integer".into(), 1, 9, lit("5")),
            ("`;`".into(), 1, 10, None),
        ]
    );
    Ok(())
}

#[test]
fn keywords_are_exact_and_case_sensitive() -> Result<()> {
    let tokens = compile_until_lexer("exit let const print Exit lets _print")?;
    assert_eq!(
        token_summaries(&tokens),
        vec![
            ("exit".into(), 1, 1, None),
            ("let".into(), 1, 6, None),
            ("const".into(), 1, 10, None),
            ("print".into(), 1, 16, None),
            ("identifier".into(), 1, 22, lit("Exit")),
            ("identifier".into(), 1, 27, lit("lets")),
            ("identifier".into(), 1, 32, lit("_print")),
        ]
    );
    Ok(())
}

#[test]
fn words_and_digits_split() -> Result<()> {
    /* Identifiers contain no digits. */
    let tokens = compile_until_lexer("ab12cd")?;
    assert_eq!(
        token_summaries(&tokens),
        vec![
            ("identifier".into(), 1, 1, lit("ab")),
            ("integer".into(), 1, 3, lit("12")),
            ("identifier".into(), 1, 5, lit("cd")),
        ]
    );
    Ok(())
}

#[test]
fn integer_digits_kept_verbatim() -> Result<()> {
    let tokens = compile_until_lexer("007 99999999999999999999999")?;
    assert_eq!(
        token_summaries(&tokens),
        vec![
            ("integer".into(), 1, 1, lit("007")),
            ("integer".into(), 1, 5, lit("99999999999999999999999")),
        ]
    );
    Ok(())
}

#[test]
fn newlines_reset_column() -> Result<()> {
    let tokens = compile_until_lexer("exit(\n  1\n);")?;
    assert_eq!(
        token_summaries(&tokens),
        vec![
            ("exit".into(), 1, 1, None),
            ("`(`".into(), 1, 5, None),
            ("integer".into(), 2, 3, lit("1")),
            ("`)`".into(), 3, 1, None),
            ("`;`".into(), 3, 2, None),
        ]
    );
    Ok(())
}

#[test]
fn token_display() -> Result<()> {
    let tokens = compile_until_lexer("print(abc);")?;
    let lines = tokens
        .iter()
        .map(|(_, t)| t.to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        lines,
        vec![
            "Token:1:1:(print)",
            "Token:1:6:(`(`)",
            "Token:1:7:(identifier, abc)",
            "Token:1:10:(`)`)",
            "Token:1:11:(`;`)",
        ]
    );
    Ok(())
}

#[test]
fn invalid_chars() {
    let actual = compile_until_lexer("let x = 1;\nlet y @ 2;").unwrap_err();
    assert_eq!(
        actual,
        CompileError::InvalidToken {
            character: '@',
            pos: SrcPos::new(2, 7),
        }
    );
    assert_eq!(actual.to_string(), "Invalid Token `@`");

    for src in ["\tlet", "x\r\n", "é", "1+2", "{"] {
        let actual = compile_until_lexer(src);
        assert!(
            matches!(actual, Err(CompileError::InvalidToken { .. })),
            "{src:?} {actual:?}"
        );
    }
}
