/// Call dispatch.
///
/// Holds the built-in table, resolves names, checks arity and runs
/// user-defined functions.
pub mod core;

/// Value built-ins: `len` and `str`.
pub mod builtin;

/// Console built-ins: `print`, `output` and `input`.
pub mod io;
