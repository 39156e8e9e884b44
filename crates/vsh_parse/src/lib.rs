mod error;
mod expand;
mod lex;
mod parse;
mod token;

use std::collections::HashMap;

use vsh_ast::ParsedCommand;

pub use crate::error::ParseError;
pub use crate::expand::{expand_aliases, expand_variables, ExpandError};
pub use crate::lex::{lex, LexError};
pub use crate::parse::parse;
pub use crate::token::Token;

/// Runs the full front end for one line of input: lexing, alias expansion,
/// variable expansion, and parsing.
///
/// Returns one [`ParsedCommand`] tree per top-level `;`-separated segment.
/// Lexical and expansion errors are converted into [`ParseError`]s. No tree
/// is returned, and nothing is executed, unless the entire line is valid.
pub fn parse_line(
    src: &str,
    aliases: &HashMap<String, String>,
    vars: &HashMap<String, String>,
) -> Result<Vec<ParsedCommand>, ParseError> {
    let tokens = lex(src)?;
    let tokens = expand_aliases(tokens, aliases)?;
    let tokens = expand_variables(tokens, vars)?;
    parse(tokens)
}
