use vsh_ast::{LogicalOp, LogicalSequence, ParsedCommand, Pipeline, Redirect, RedirectMode, SimpleCommand};

use super::cursor::TokenCursor;
use crate::error::ParseError;
use crate::token::Token;

/// Tries to parse a sequence of fully expanded tokens into an ordered list
/// of [`ParsedCommand`] trees, one per top-level `;`-separated segment.
///
/// Empty input, and empty segments between separators, yield no trees.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<ParsedCommand>, ParseError> {
    let mut cursor = TokenCursor::new(tokens);
    let mut program = Vec::new();

    loop {
        // Semi tokens terminate segments and may repeat freely.
        while cursor.next_if_eq(&Token::Semi) {}

        if cursor.peek().is_none() {
            break;
        }

        program.push(parse_logical(&mut cursor)?);

        match cursor.next() {
            None => break,
            Some(Token::Semi) => continue,
            Some(token) => return Err(ParseError::UnexpectedToken(token)),
        }
    }

    Ok(program)
}

/// Parses a left-associative chain of `&&`/`||` operators over pipelines.
///
/// Chains build a left-leaning tree: `a && b || c` parses as
/// `(a && b) || c`.
fn parse_logical(cursor: &mut TokenCursor) -> Result<ParsedCommand, ParseError> {
    let mut command = parse_pipeline(cursor)?;

    loop {
        let operator = match cursor.peek() {
            Some(Token::AndIf) => LogicalOp::And,
            Some(Token::OrIf) => LogicalOp::Or,
            _ => break,
        };
        cursor.next();

        let right = parse_pipeline(cursor)?;
        command = ParsedCommand::Logical(LogicalSequence::new(command, operator, right));
    }

    Ok(command)
}

/// Parses one or more `|`-joined simple commands.
///
/// A single command is never wrapped in a [`Pipeline`].
fn parse_pipeline(cursor: &mut TokenCursor) -> Result<ParsedCommand, ParseError> {
    let mut stages = vec![parse_simple(cursor)?];

    while cursor.next_if_eq(&Token::Pipe) {
        stages.push(parse_simple(cursor)?);
    }

    if stages.len() == 1 {
        Ok(ParsedCommand::Simple(stages.remove(0)))
    } else {
        Ok(ParsedCommand::Pipeline(Pipeline { stages }))
    }
}

/// Parses a single command: a command name followed by arguments and
/// redirect-operator/filename pairs, up to a boundary token or the end of
/// input.
fn parse_simple(cursor: &mut TokenCursor) -> Result<SimpleCommand, ParseError> {
    let command = match cursor.peek() {
        Some(token) if token.is_word_like() => next_text(cursor)?,
        _ => return Err(ParseError::ExpectedCommandName),
    };
    let mut command = SimpleCommand::new(command);

    loop {
        match cursor.peek() {
            Some(token) if token.is_word_like() => command.arg(next_text(cursor)?),
            Some(Token::Write) => {
                cursor.next();
                command.redirect(Redirect::new(RedirectMode::Write, parse_redirect_target(cursor)?));
            }
            Some(Token::Append) => {
                cursor.next();
                command.redirect(Redirect::new(RedirectMode::Append, parse_redirect_target(cursor)?));
            }
            _ => break,
        }
    }

    Ok(command)
}

/// Parses the file name following a redirect operator.
fn parse_redirect_target(cursor: &mut TokenCursor) -> Result<String, ParseError> {
    match cursor.peek() {
        Some(token) if token.is_word_like() => next_text(cursor),
        _ => Err(ParseError::MissingRedirectTarget),
    }
}

/// Consumes the next token and returns its textual value.
///
/// The caller must have peeked at a word-like token.
fn next_text(cursor: &mut TokenCursor) -> Result<String, ParseError> {
    cursor
        .next()
        .and_then(Token::into_text)
        .ok_or(ParseError::ExpectedCommandName)
}
