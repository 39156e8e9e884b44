use super::lexer::{lex, LexError};
use crate::token::Token::*;

#[test]
fn lex_empty_input() {
    assert_eq!(lex(""), Ok(vec![]));
    assert_eq!(lex("   \t  "), Ok(vec![]));
}

#[test]
fn lex_operators() {
    assert_eq!(lex("|"), Ok(vec![Pipe]));
    assert_eq!(lex("||"), Ok(vec![OrIf]));
    assert_eq!(lex("&&"), Ok(vec![AndIf]));
    assert_eq!(lex(">"), Ok(vec![Write]));
    assert_eq!(lex(">>"), Ok(vec![Append]));
    assert_eq!(lex(";"), Ok(vec![Semi]));
}

#[test]
fn lex_two_char_operators_before_one_char() {
    assert_eq!(lex("a||b"), Ok(vec![Word("a".into()), OrIf, Word("b".into())]));
    assert_eq!(
        lex("a | | b"),
        Ok(vec![Word("a".into()), Pipe, Pipe, Word("b".into())])
    );
    assert_eq!(
        lex("a >> b"),
        Ok(vec![Word("a".into()), Append, Word("b".into())])
    );
    assert_eq!(lex(">>>"), Ok(vec![Append, Write]));
}

#[test]
fn lex_words() {
    assert_eq!(lex("word"), Ok(vec![Word("word".into())]));
    assert_eq!(lex("-lah"), Ok(vec![Word("-lah".into())]));
    assert_eq!(
        lex("a b  c"),
        Ok(vec![Word("a".into()), Word("b".into()), Word("c".into())])
    );
}

#[test]
fn lex_lone_amp_is_a_literal_word() {
    assert_eq!(lex("&"), Ok(vec![Word("&".into())]));
    assert_eq!(lex("a&b"), Ok(vec![Word("a&b".into())]));
    assert_eq!(
        lex("a&&b"),
        Ok(vec![Word("a".into()), AndIf, Word("b".into())])
    );
}

#[test]
fn lex_single_quoted() {
    assert_eq!(lex("'a b'"), Ok(vec![SingleQuoted("a b".into())]));
    assert_eq!(lex("''"), Ok(vec![SingleQuoted("".into())]));

    // Single quotes copy characters verbatim, including backslashes.
    assert_eq!(lex(r"'a\b'"), Ok(vec![SingleQuoted(r"a\b".into())]));
    assert_eq!(lex("'$X'"), Ok(vec![SingleQuoted("$X".into())]));
}

#[test]
fn lex_double_quoted() {
    assert_eq!(lex("\"a b\""), Ok(vec![DoubleQuoted("a b".into())]));
    assert_eq!(lex(r#""a \" b""#), Ok(vec![DoubleQuoted("a \" b".into())]));
    assert_eq!(lex(r#""a \\ b""#), Ok(vec![DoubleQuoted("a \\ b".into())]));

    // Other backslash sequences are kept as-is.
    assert_eq!(lex(r#""C:\Dev""#), Ok(vec![DoubleQuoted(r"C:\Dev".into())]));
}

#[test]
fn lex_unterminated_quotes() {
    assert_eq!(lex("\"abc"), Err(LexError::UnterminatedDoubleQuote));
    assert_eq!(lex("'abc"), Err(LexError::UnterminatedSingleQuote));
    assert_eq!(lex(r#""abc\"#), Err(LexError::UnterminatedDoubleQuote));
    assert_eq!(lex("name='abc"), Err(LexError::UnterminatedSingleQuote));
}

#[test]
fn lex_embedded_quotes_are_preserved_in_words() {
    assert_eq!(
        lex("name='value with spaces'"),
        Ok(vec![Word("name='value with spaces'".into())])
    );
    assert_eq!(
        lex(r#"key="a b""#),
        Ok(vec![Word(r#"key="a b""#.into())])
    );
}

#[test]
fn lex_mixed_line() {
    assert_eq!(
        lex("a \"b c\" | d"),
        Ok(vec![
            Word("a".into()),
            DoubleQuoted("b c".into()),
            Pipe,
            Word("d".into()),
        ])
    );
}

#[test]
fn lex_redirect_pairs() {
    assert_eq!(
        lex("echo hi > out.txt"),
        Ok(vec![
            Word("echo".into()),
            Word("hi".into()),
            Write,
            Word("out.txt".into()),
        ])
    );
    assert_eq!(
        lex("echo hi>>out.txt"),
        Ok(vec![
            Word("echo".into()),
            Word("hi".into()),
            Append,
            Word("out.txt".into()),
        ])
    );
}
