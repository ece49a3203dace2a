use thiserror::Error;

use crate::ast::Position;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the [`Position`] of the offending input and displays
/// as `line L:C message`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token the grammar does not allow here.
    #[error("{position} unexpected token '{token}', expected {expected}")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// What the parser was looking for.
        expected: &'static str,
        /// Where the token starts.
        position: Position,
    },
    /// Reached the end of input in the middle of a statement.
    #[error("{position} unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: &'static str,
        /// The position just past the last character.
        position: Position,
    },
    /// The lexer found text that is not part of any token.
    #[error("{position} invalid character sequence '{text}'")]
    InvalidCharacter {
        /// The unrecognized text.
        text:     String,
        /// Where the text starts.
        position: Position,
    },
}

impl ParseError {
    /// Gets the position where the error was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::InvalidCharacter { position, .. } => *position,
        }
    }
}
