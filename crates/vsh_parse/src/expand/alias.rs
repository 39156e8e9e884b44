use std::collections::{HashMap, HashSet};

use crate::lex::{lex, LexError};
use crate::token::Token;

/// The syntactic position of the token currently being scanned.
///
/// Alias substitution may only occur in command position: the first token
/// overall, or the first token after a command separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Command,
    Argument,
}

/// Expands aliases in command position.
///
/// A [`Token::Word`] in command position naming a known alias is replaced by
/// the recursively expanded tokenization of the alias value. A name that has
/// already been expanded in the current chain is left unexpanded, which
/// guarantees termination on self-referential or mutually-referential
/// aliases.
///
/// Re-lexing an alias value can fail, in which case the lexical error is
/// propagated.
pub fn expand_aliases(
    tokens: Vec<Token>,
    aliases: &HashMap<String, String>,
) -> Result<Vec<Token>, LexError> {
    if aliases.is_empty() {
        return Ok(tokens);
    }

    let mut output = Vec::with_capacity(tokens.len());
    expand_into(tokens, aliases, &HashSet::new(), &mut output)?;
    Ok(output)
}

/// Expands aliases within `tokens`, appending the result to `output`.
///
/// `visited` holds the alias names already expanded in the current chain.
fn expand_into(
    tokens: Vec<Token>,
    aliases: &HashMap<String, String>,
    visited: &HashSet<String>,
    output: &mut Vec<Token>,
) -> Result<(), LexError> {
    let mut position = Position::Command;

    for token in tokens {
        match token {
            Token::Word(name)
                if position == Position::Command
                    && !visited.contains(&name)
                    && aliases.contains_key(&name) =>
            {
                let value_tokens = lex(&aliases[&name])?;

                let mut chain = visited.clone();
                chain.insert(name);
                expand_into(value_tokens, aliases, &chain, output)?;

                position = position_after_splice(output);
            }
            token if token.resets_command_position() => {
                output.push(token);
                position = Position::Command;
            }
            token if token.is_word_like() => {
                output.push(token);
                position = Position::Argument;
            }

            // Redirect operators do not affect the position.
            token => output.push(token),
        }
    }

    Ok(())
}

/// Determines the position following a spliced alias expansion.
///
/// An alias value ending in a command separator, or expanding to nothing,
/// leaves the scanner in command position.
fn position_after_splice(output: &[Token]) -> Position {
    match output.last() {
        Some(token) if token.resets_command_position() => Position::Command,
        Some(_) => Position::Argument,
        None => Position::Command,
    }
}
