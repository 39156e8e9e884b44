use std::iter::Peekable;
use std::vec::IntoIter;

use crate::token::Token;

/// A cursor for traversing a predefined sequence of tokens.
pub(crate) struct TokenCursor {
    tokens: Peekable<IntoIter<Token>>,
}

impl TokenCursor {
    /// Constructs a new cursor for a predefined set of tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
        }
    }

    /// Returns a reference to the next token without advancing the cursor.
    pub fn peek(&mut self) -> Option<&Token> {
        self.tokens.peek()
    }

    /// Returns the next token while advancing the cursor.
    pub fn next(&mut self) -> Option<Token> {
        self.tokens.next()
    }

    /// Advances the cursor past the next token if it equals `expected`.
    ///
    /// Returns `true` if the cursor was advanced.
    pub fn next_if_eq(&mut self, expected: &Token) -> bool {
        self.tokens.next_if(|token| token == expected).is_some()
    }
}
