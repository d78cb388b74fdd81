/// Lexing errors.
///
/// Raised while turning source text into tokens: characters that start no
/// token, strings that never close, malformed `<...>` annotations and
/// integer literals that do not fit in 64 bits.
pub mod lex_error;
/// Parsing errors.
///
/// Raised while building the syntax tree from tokens. Every parse error
/// names what was expected, what was found, and where.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: type
/// mismatches, undefined names, writes to constants, a missing entry point
/// and failures of the console sink.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

use crate::ast::Position;

/// Any failure of the full pipeline.
///
/// Each stage returns its own error type; this enum lets callers that run
/// the whole pipeline propagate all of them with `?`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Location of the failure, if the error has one.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Lex(err) => Some(err.position()),
            Self::Parse(err) => Some(err.position()),
            Self::Runtime(err) => err.position(),
        }
    }
}
