use std::fmt::Display;

/// A unit of input identified through lexical analysis.
///
/// Tokens are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An unquoted word. Embedded quoted spans keep their quote characters.
    Word(String),

    /// A double-quoted string with `\"` and `\\` escapes processed.
    DoubleQuoted(String),

    /// A single-quoted string copied verbatim.
    SingleQuoted(String),

    /// "|"
    Pipe,
    /// "&&"
    AndIf,
    /// "||"
    OrIf,
    /// ">"
    Write,
    /// ">>"
    Append,
    /// ";"
    Semi,
}

impl Token {
    /// Returns `true` if the token can act as a command name or argument.
    pub fn is_word_like(&self) -> bool {
        matches!(
            self,
            Token::Word(_) | Token::DoubleQuoted(_) | Token::SingleQuoted(_)
        )
    }

    /// Returns `true` if the token separates commands, placing the token
    /// that follows it in command position.
    pub fn resets_command_position(&self) -> bool {
        matches!(
            self,
            Token::Pipe | Token::AndIf | Token::OrIf | Token::Semi
        )
    }

    /// Returns the token's textual value, consuming the token.
    ///
    /// Operator tokens have no textual value.
    pub fn into_text(self) -> Option<String> {
        match self {
            Token::Word(text) | Token::DoubleQuoted(text) | Token::SingleQuoted(text) => Some(text),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Word(text) => write!(f, "{text}"),
            Token::DoubleQuoted(text) => write!(f, "\"{text}\""),
            Token::SingleQuoted(text) => write!(f, "'{text}'"),
            Token::Pipe => write!(f, "|"),
            Token::AndIf => write!(f, "&&"),
            Token::OrIf => write!(f, "||"),
            Token::Write => write!(f, ">"),
            Token::Append => write!(f, ">>"),
            Token::Semi => write!(f, ";"),
        }
    }
}
