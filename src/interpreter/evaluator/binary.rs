/// Operator dispatch.
pub mod core;
/// Arithmetic and text concatenation.
pub mod arithmetic;
/// Equality and ordering.
pub mod comparison;
/// Logical conjunction and disjunction.
pub mod logic;
