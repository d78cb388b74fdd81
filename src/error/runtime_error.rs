use thiserror::Error;

use crate::ast::Position;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A value is not admitted by the type it is checked against, or a type
    /// name is unknown, or an operator does not accept its operands.
    #[error("Type error at {position}: {details}")]
    TypeError {
        /// Details about the mismatch.
        details:  String,
        /// Location of the offending construct.
        position: Position,
    },
    /// A name was read (or, in strict mode, written) before any binding
    /// existed.
    #[error("Undefined variable '{name}' at {position}")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Location of the reference.
        position: Position,
    },
    /// Called a function that is neither built in nor declared.
    #[error("Undefined function '{name}' at {position}")]
    UndefinedFunction {
        /// The name of the function.
        name:     String,
        /// Location of the call.
        position: Position,
    },
    /// A write targeted a name bound as `const`.
    #[error("Cannot reassign constant variable '{name}' at {position}")]
    ConstReassignment {
        /// The name of the constant.
        name:     String,
        /// Location of the write.
        position: Position,
    },
    /// The program has no usable `main`.
    #[error("Missing entry point: {reason}")]
    MissingEntryPoint {
        /// Why the entry point is unusable.
        reason: String,
    },
    /// An operator reached the evaluator in a position it cannot occupy.
    /// The parser never builds such a tree, so this signals an internal
    /// inconsistency.
    #[error("Unknown operator '{lexeme}' at {position}")]
    UnknownOperator {
        /// The operator lexeme.
        lexeme:   String,
        /// Location of the operator.
        position: Position,
    },
    /// A function received the wrong number of arguments.
    #[error("Function '{name}' expects {expected} argument(s) but received {found} at {position}")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Description of the accepted count.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// Location of the call.
        position: Position,
    },
    /// Too many user-defined calls were active at once, usually from
    /// unbounded recursion.
    #[error("Stack overflow calling '{name}' at {position}: more than {limit} nested calls")]
    StackOverflow {
        /// The function whose call exceeded the limit.
        name:     String,
        /// The configured maximum depth.
        limit:    usize,
        /// Location of the call.
        position: Position,
    },
    /// Attempted to declare a function that already exists.
    #[error("Function '{name}' is already defined at {position}")]
    FunctionAlreadyDefined {
        /// The name of the function.
        name:     String,
        /// Location of the second declaration.
        position: Position,
    },
    /// Attempted to declare a function with a built-in name.
    #[error("Cannot redefine built-in function '{name}' at {position}")]
    BuiltinRedefinition {
        /// The name of the function.
        name:     String,
        /// Location of the declaration.
        position: Position,
    },
    /// A `->` ran at the top level.
    #[error("Return statement outside of a function at {position}")]
    ReturnOutsideFunction {
        /// Location of the arrow.
        position: Position,
    },
    /// An index fell outside an array or text.
    #[error("Index {index} out of bounds for length {length} at {position}")]
    IndexOutOfBounds {
        /// The requested index.
        index:    i64,
        /// The length of the indexed value.
        length:   usize,
        /// Location of the indexing expression.
        position: Position,
    },
    /// An object has no such key, or a value has no such property.
    #[error("Unknown property '{property}' at {position}")]
    UnknownProperty {
        /// The property name.
        property: String,
        /// Location of the access.
        position: Position,
    },
    /// The console sink failed to write or read.
    #[error("I/O error at {position}: {source}")]
    Io {
        /// The underlying failure.
        #[source]
        source:   std::io::Error,
        /// Location of the built-in call.
        position: Position,
    },
}

impl RuntimeError {
    /// Location of the failure, if the error has one.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::MissingEntryPoint { .. } => None,
            Self::TypeError { position, .. }
            | Self::UndefinedVariable { position, .. }
            | Self::UndefinedFunction { position, .. }
            | Self::ConstReassignment { position, .. }
            | Self::UnknownOperator { position, .. }
            | Self::ArgumentCountMismatch { position, .. }
            | Self::StackOverflow { position, .. }
            | Self::FunctionAlreadyDefined { position, .. }
            | Self::BuiltinRedefinition { position, .. }
            | Self::ReturnOutsideFunction { position }
            | Self::IndexOutOfBounds { position, .. }
            | Self::UnknownProperty { position, .. }
            | Self::Io { position, .. } => Some(*position),
        }
    }
}
