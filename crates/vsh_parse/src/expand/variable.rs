use std::collections::HashMap;

use thiserror::Error;

use crate::lex::input::is_identifier_char;
use crate::token::Token;

/// Expansion errors are returned when a variable reference is malformed.
///
/// An expansion error aborts the line before parsing or execution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    /// A `${` was opened but never closed.
    #[error("unterminated variable expansion: missing `}}`")]
    UnterminatedBrace,
}

/// Expands `$NAME` and `${NAME}` references against an environment map.
///
/// Substitution applies to [`Token::Word`] and [`Token::DoubleQuoted`]
/// tokens only; single-quoted tokens pass through verbatim. Unset names
/// expand to the empty string.
pub fn expand_variables(
    tokens: Vec<Token>,
    vars: &HashMap<String, String>,
) -> Result<Vec<Token>, ExpandError> {
    tokens
        .into_iter()
        .map(|token| match token {
            Token::Word(text) => expand_text(&text, vars).map(Token::Word),
            Token::DoubleQuoted(text) => expand_text(&text, vars).map(Token::DoubleQuoted),
            token => Ok(token),
        })
        .collect()
}

/// Expands all variable references within a token's text.
fn expand_text(text: &str, vars: &HashMap<String, String>) -> Result<String, ExpandError> {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            // ${NAME} requires the closing brace.
            Some('{') => {
                chars.next();
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => name.push(ch),
                        None => return Err(ExpandError::UnterminatedBrace),
                    }
                }
                push_value(&mut result, &name, vars);
            }

            // $NAME consumes the maximal run of identifier characters.
            Some(&ch) if is_identifier_char(ch) => {
                let mut name = String::new();
                while let Some(&ch) = chars.peek() {
                    if !is_identifier_char(ch) {
                        break;
                    }
                    name.push(ch);
                    chars.next();
                }
                push_value(&mut result, &name, vars);
            }

            // A bare "$" with no identifier stays a literal character.
            _ => result.push('$'),
        }
    }

    Ok(result)
}

/// Appends a variable's value, or nothing for an unset name.
fn push_value(result: &mut String, name: &str, vars: &HashMap<String, String>) {
    if let Some(value) = vars.get(name) {
        result.push_str(value);
    }
}
