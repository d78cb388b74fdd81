use thiserror::Error;

use crate::ast::Position;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A specific token or construct was required but something else was
    /// found.
    #[error("Expected {expected}, found {found} at {position}")]
    Expected {
        /// Description of what the grammar requires here.
        expected: String,
        /// The text of the token actually present, or `end of input`.
        found:    String,
        /// Location of the token actually present.
        position: Position,
    },
    /// A function lists the same parameter name twice.
    #[error("Expected unique parameter names, found '{name}' twice at {position}")]
    DuplicateParameter {
        /// The repeated name.
        name:     String,
        /// Location of the second occurrence.
        position: Position,
    },
}

impl ParseError {
    /// Location of the failure.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Expected { position, .. } | Self::DuplicateParameter { position, .. } => {
                *position
            },
        }
    }
}
