use vsh_ast::{LogicalOp, LogicalSequence, ParsedCommand, Pipeline, Redirect, RedirectMode, SimpleCommand};

use super::parser::parse;
use crate::error::ParseError;
use crate::lex::lex;
use crate::token::Token;

fn parsed(src: &str) -> Result<Vec<ParsedCommand>, ParseError> {
    parse(lex(src).expect("valid input"))
}

fn simple(command: &str, args: &[&str]) -> SimpleCommand {
    SimpleCommand {
        command: command.into(),
        args: args.iter().map(|arg| arg.to_string()).collect(),
        redirects: Vec::new(),
    }
}

#[test]
fn parse_empty_input() {
    assert_eq!(parsed(""), Ok(vec![]));
    assert_eq!(parsed(";"), Ok(vec![]));
    assert_eq!(parsed("; ;;"), Ok(vec![]));
}

#[test]
fn parse_simple_command() {
    assert_eq!(
        parsed("ls -l /tmp"),
        Ok(vec![ParsedCommand::Simple(simple("ls", &["-l", "/tmp"]))])
    );
}

#[test]
fn parse_quoted_arguments() {
    assert_eq!(
        parsed("echo \"a b\" 'c d'"),
        Ok(vec![ParsedCommand::Simple(simple("echo", &["a b", "c d"]))])
    );
}

#[test]
fn parse_pipeline() {
    assert_eq!(
        parsed("a | b | c"),
        Ok(vec![ParsedCommand::Pipeline(Pipeline {
            stages: vec![simple("a", &[]), simple("b", &[]), simple("c", &[])],
        })])
    );
}

#[test]
fn single_command_is_never_wrapped_in_a_pipeline() {
    assert!(matches!(
        parsed("ls").as_deref(),
        Ok([ParsedCommand::Simple(_)])
    ));
}

#[test]
fn pipeline_binds_tighter_than_logical_operators() {
    assert_eq!(
        parsed("a && b | c"),
        Ok(vec![ParsedCommand::Logical(LogicalSequence::new(
            ParsedCommand::Simple(simple("a", &[])),
            LogicalOp::And,
            ParsedCommand::Pipeline(Pipeline {
                stages: vec![simple("b", &[]), simple("c", &[])],
            }),
        ))])
    );
}

#[test]
fn logical_chains_are_left_associative() {
    assert_eq!(
        parsed("a && b || c"),
        Ok(vec![ParsedCommand::Logical(LogicalSequence::new(
            ParsedCommand::Logical(LogicalSequence::new(
                ParsedCommand::Simple(simple("a", &[])),
                LogicalOp::And,
                ParsedCommand::Simple(simple("b", &[])),
            )),
            LogicalOp::Or,
            ParsedCommand::Simple(simple("c", &[])),
        ))])
    );
}

#[test]
fn semicolons_separate_top_level_segments() {
    assert_eq!(
        parsed("a; b && c; d"),
        Ok(vec![
            ParsedCommand::Simple(simple("a", &[])),
            ParsedCommand::Logical(LogicalSequence::new(
                ParsedCommand::Simple(simple("b", &[])),
                LogicalOp::And,
                ParsedCommand::Simple(simple("c", &[])),
            )),
            ParsedCommand::Simple(simple("d", &[])),
        ])
    );
}

#[test]
fn parse_redirects() {
    assert_eq!(
        parsed("echo hi > out.txt >> log.txt"),
        Ok(vec![ParsedCommand::Simple(SimpleCommand {
            command: "echo".into(),
            args: vec!["hi".into()],
            redirects: vec![
                Redirect::new(RedirectMode::Write, "out.txt"),
                Redirect::new(RedirectMode::Append, "log.txt"),
            ],
        })])
    );
}

#[test]
fn arguments_may_follow_redirects() {
    assert_eq!(
        parsed("echo a > f b"),
        Ok(vec![ParsedCommand::Simple(SimpleCommand {
            command: "echo".into(),
            args: vec!["a".into(), "b".into()],
            redirects: vec![Redirect::new(RedirectMode::Write, "f")],
        })])
    );
}

#[test]
fn dangling_redirect_is_an_error() {
    assert_eq!(parsed("echo hi >"), Err(ParseError::MissingRedirectTarget));
    assert_eq!(
        parsed("echo hi >> | cat"),
        Err(ParseError::MissingRedirectTarget)
    );
}

#[test]
fn missing_command_name_is_an_error() {
    assert_eq!(parsed("| a"), Err(ParseError::ExpectedCommandName));
    assert_eq!(parsed("a | "), Err(ParseError::ExpectedCommandName));
    assert_eq!(parsed("a && "), Err(ParseError::ExpectedCommandName));
    assert_eq!(parsed("&& a"), Err(ParseError::ExpectedCommandName));
}

#[test]
fn pipe_directly_after_command_list_is_unexpected() {
    // A fresh segment after ";" must not start with an operator.
    assert_eq!(parsed("a ; | b"), Err(ParseError::ExpectedCommandName));
}

#[test]
fn quoted_words_can_name_commands() {
    assert_eq!(
        parsed("'my program' arg"),
        Ok(vec![ParsedCommand::Simple(simple("my program", &["arg"]))])
    );
}

#[test]
fn trailing_operator_is_an_error() {
    let error = parse(vec![
        Token::Word("a".into()),
        Token::Word("b".into()),
        Token::AndIf,
    ])
    .expect_err("trailing operator");
    assert_eq!(error, ParseError::ExpectedCommandName);
}

#[test]
fn unexpected_token_error_displays_the_token() {
    assert_eq!(
        ParseError::UnexpectedToken(Token::Append).to_string(),
        "unexpected token: >>"
    );
    assert_eq!(
        ParseError::UnexpectedToken(Token::DoubleQuoted("a b".into())).to_string(),
        "unexpected token: \"a b\""
    );
}
