/// Parser entry points and the expression root.
///
/// Declares the result type shared by every parsing routine and drives the
/// top-level loop that turns a token slice into a [`crate::ast::Program`].
pub mod core;

/// Statement parsing.
///
/// Dispatches on the first token of a statement: declarations, assignments,
/// call statements, function declarations and returns.
pub mod statement;

/// Brace-delimited blocks and the control-flow statements built from them.
pub mod block;

/// Binary expressions, consumed strictly left to right.
pub mod binary;

/// Prefix negation, postfix indexing and member access, and primary
/// expressions.
pub mod unary;

/// Token-matching helpers shared by the other parser modules.
pub mod utils;
