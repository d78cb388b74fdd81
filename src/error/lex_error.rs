use thiserror::Error;

use crate::ast::Position;

/// Represents all errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No token starts with this character.
    #[error("Unexpected character '{character}' at {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position:  Position,
    },
    /// A string literal reached the end of input without its closing quote.
    #[error("Unterminated string literal starting at {position}")]
    UnterminatedString {
        /// Location of the opening quote.
        position: Position,
    },
    /// A `<...>` annotation that is neither a declaration nor a function
    /// marker, such as `<int str>`.
    #[error("Invalid annotation '{text}' at {position}")]
    InvalidAnnotation {
        /// The annotation as written.
        text:     String,
        /// Where it starts.
        position: Position,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("Number literal '{text}' is too large at {position}")]
    NumberTooLarge {
        /// The literal as written.
        text:     String,
        /// Where it starts.
        position: Position,
    },
}

impl LexError {
    /// Location of the failure.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnterminatedString { position }
            | Self::InvalidAnnotation { position, .. }
            | Self::NumberTooLarge { position, .. } => *position,
        }
    }
}
