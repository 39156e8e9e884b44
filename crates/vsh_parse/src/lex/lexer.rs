use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

use crate::lex::input::is_whitespace;
use crate::token::Token;

/// Lex errors are returned when input cannot be split into tokens.
///
/// A lexical error aborts the line before any expansion, parsing, or
/// execution takes place.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A single quote was opened but never closed.
    #[error("unterminated single-quoted string")]
    UnterminatedSingleQuote,

    /// A double quote was opened but never closed.
    #[error("unterminated double-quoted string")]
    UnterminatedDoubleQuote,
}

/// Lexes some input `str` and returns all tokens within the input.
///
/// Whitespace separates tokens and is discarded.
pub fn lex(src: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}

/// A lexer takes some `str` input and splits it into [`Token`]s.
struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            input: src.chars().peekable(),
        }
    }

    /// Advances past leading whitespace and returns the next token, or
    /// `None` when the input is exhausted.
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let Some(&ch) = self.input.peek() else {
            return Ok(None);
        };

        let token = match ch {
            '|' => self.eat_pipe_or_orif(),
            '>' => self.eat_write_or_append(),
            ';' => self.eat_char(Token::Semi),
            '&' if self.peek_second() == Some('&') => {
                self.input.next();
                self.eat_char(Token::AndIf)
            }
            '\'' => Token::SingleQuoted(self.eat_single_quoted()?),
            '"' => Token::DoubleQuoted(self.eat_double_quoted()?),

            // A lone "&" is not an operator and falls through to generic
            // word scanning.
            _ => self.eat_word()?,
        };

        Ok(Some(token))
    }

    /// Returns the character after the one currently peeked at.
    fn peek_second(&self) -> Option<char> {
        let mut ahead = self.input.clone();
        ahead.next();
        ahead.next()
    }

    /// Eats a single character and returns a predefined token for it.
    fn eat_char(&mut self, token: Token) -> Token {
        self.input.next();
        token
    }

    /// Eats [`Token::OrIf`] "||" or [`Token::Pipe`] "|".
    fn eat_pipe_or_orif(&mut self) -> Token {
        self.input.next();
        if self.input.next_if_eq(&'|').is_some() {
            Token::OrIf
        } else {
            Token::Pipe
        }
    }

    /// Eats [`Token::Append`] ">>" or [`Token::Write`] ">".
    fn eat_write_or_append(&mut self) -> Token {
        self.input.next();
        if self.input.next_if_eq(&'>').is_some() {
            Token::Append
        } else {
            Token::Write
        }
    }

    /// Eats a single-quoted string, copying characters verbatim until the
    /// matching quote. The surrounding quotes are not included.
    fn eat_single_quoted(&mut self) -> Result<String, LexError> {
        self.input.next();
        let mut value = String::new();

        loop {
            match self.input.next() {
                Some('\'') => return Ok(value),
                Some(ch) => value.push(ch),
                None => return Err(LexError::UnterminatedSingleQuote),
            }
        }
    }

    /// Eats a double-quoted string. Only `\"` and `\\` are processed as
    /// escapes; any other backslash sequence is kept as-is.
    fn eat_double_quoted(&mut self) -> Result<String, LexError> {
        self.input.next();
        let mut value = String::new();

        loop {
            match self.input.next() {
                Some('"') => return Ok(value),
                Some('\\') => match self.input.next() {
                    Some(ch @ ('"' | '\\')) => value.push(ch),
                    Some(ch) => {
                        value.push('\\');
                        value.push(ch);
                    }
                    None => return Err(LexError::UnterminatedDoubleQuote),
                },
                Some(ch) => value.push(ch),
                None => return Err(LexError::UnterminatedDoubleQuote),
            }
        }
    }

    /// Eats a word, stopping at whitespace or the start of an operator.
    ///
    /// A quote opened within the word is consumed to its matching quote with
    /// the quote characters preserved literally inside the word, unlike a
    /// standalone quoted token.
    fn eat_word(&mut self) -> Result<Token, LexError> {
        let mut word = String::new();

        while let Some(&ch) = self.input.peek() {
            match ch {
                ch if is_whitespace(ch) => break,
                '|' | ';' | '>' => break,
                '&' if self.peek_second() == Some('&') => break,
                '\'' | '"' => self.eat_embedded_quote(ch, &mut word)?,
                _ => {
                    word.push(ch);
                    self.input.next();
                }
            }
        }

        Ok(Token::Word(word))
    }

    /// Eats a quoted span inside a word, keeping the quote characters.
    fn eat_embedded_quote(&mut self, delimiter: char, word: &mut String) -> Result<(), LexError> {
        word.push(delimiter);
        self.input.next();

        loop {
            match self.input.next() {
                Some(ch) if ch == delimiter => {
                    word.push(ch);
                    return Ok(());
                }
                Some(ch) => word.push(ch),
                None if delimiter == '\'' => return Err(LexError::UnterminatedSingleQuote),
                None => return Err(LexError::UnterminatedDoubleQuote),
            }
        }
    }

    /// Skips consecutive whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.input.next_if(|ch| is_whitespace(*ch)).is_some() {}
    }
}
