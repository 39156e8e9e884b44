use thiserror::Error;

use crate::expand::ExpandError;
use crate::lex::LexError;
use crate::token::Token;

/// Parse errors are returned when a line of input cannot be turned into
/// command trees.
///
/// A parse error aborts the line before execution; nothing runs, and the
/// user must resubmit a corrected line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input could not be split into tokens.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A variable reference in the input was malformed.
    #[error(transparent)]
    Expand(#[from] ExpandError),

    /// A command was expected, but the input starts a command with an
    /// operator or ends prematurely.
    #[error("expected command name")]
    ExpectedCommandName,

    /// A redirect operator was not followed by a file name token.
    #[error("expected file name after redirect")]
    MissingRedirectTarget,

    /// A token was found where a segment should already have ended.
    #[error("unexpected token: {0}")]
    UnexpectedToken(Token),
}
