/// Core evaluation logic.
///
/// Contains the `Evaluator` that owns the environment, function table and
/// console, the statement and expression dispatch, and the entry-point
/// policy.
pub mod core;

/// Variable bindings.
///
/// Maps names to values and mutability, and enforces that a constant is
/// never written twice.
pub mod environment;

/// Console sinks.
///
/// The `Console` trait through which the output and input built-ins reach
/// the outside world, with a standard-stream and an in-memory
/// implementation.
pub mod console;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, concatenation, comparisons and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical negation.
pub mod unary;

/// Function evaluation.
///
/// Handles built-in and user-defined function calls, argument checking, and
/// return value checking.
pub mod function;

/// Conditionals and loops.
pub mod control_flow;

/// Array and object literals, indexing and property access.
pub mod collection;

/// Helpers shared by the evaluation modules.
pub mod utils;
