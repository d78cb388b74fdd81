/// Runtime values.
///
/// Defines the `Value` enum produced by evaluating expressions, its textual
/// rendering, truthiness, and the loose equality and ordering used by the
/// comparison operators.
pub mod core;
/// Declared types.
///
/// Defines `TypeTag`, the predicate a declaration, parameter or return type
/// checks a value against.
pub mod types;
