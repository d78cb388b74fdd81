//! # arrow-lang
//!
//! arrow-lang is the front end and evaluator of Arrow, a small imperative
//! scripting language with arrow-shaped operators.
//! It tokenizes, parses and evaluates programs with typed `const` and `var`
//! bindings, functions with an auto-invoked `main`, conditionals, loops,
//! arrays and objects.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Config,
    error::Error,
    interpreter::evaluator::{
        console::{Console, StdConsole},
        core::Evaluator,
        environment::Environment,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
/// - Names the operator lexemes shared by the lexer and the parser.
pub mod ast;
/// Evaluation policy.
///
/// Decides whether a program must declare `main` and whether assigning to
/// an undeclared name declares it or fails.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code.
/// Every error carries a stable, human-readable message and, where one
/// exists, the 1-based line and column of the offending construct.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and detailed messages for context.
/// - Wraps the stage errors in one `Error` for pipeline callers.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for Arrow programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for each stage.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion and rendering.
///
/// This module provides helpers used by values and the evaluator: lossless
/// index and length conversions, integer-to-float widening, numeric parsing
/// of text and float formatting.
pub mod util;

pub use interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse};

/// Runs a program and returns its final environment.
///
/// Program output goes to the standard streams. Use [`run_with`] to supply
/// a different console.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error.
///
/// # Examples
/// ```
/// use arrow_lang::{config::Config, interpreter::value::core::Value, run};
///
/// // Operators apply left to right: (10 + 5) * 2.
/// let env = run("result <== 10 <+> 5 <*> 2", Config::default()).unwrap();
/// assert_eq!(env.value("result"), Some(&Value::Integer(30)));
///
/// // Reading a name that was never bound fails.
/// let res = run("y <== x <+> 1", Config::default());
/// assert!(res.is_err());
/// ```
pub fn run(source: &str, config: Config) -> Result<Environment, Error> {
    run_with(source, config, StdConsole)
}

/// Runs a program against `console` and returns its final environment.
///
/// Pass `&mut console` to keep access to the console afterwards.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error.
///
/// # Examples
/// ```
/// use arrow_lang::{config::Config, interpreter::evaluator::console::BufferConsole, run_with};
///
/// let mut console = BufferConsole::new();
/// run_with("message <== \"Hello, \" <+> \"World\"\nprint(message)",
///          Config::default(),
///          &mut console).unwrap();
///
/// assert_eq!(console.output(), "Hello, World\n");
/// ```
pub fn run_with<C: Console>(source: &str, config: Config, console: C) -> Result<Environment, Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    let environment = Evaluator::new(config, console).evaluate(&program)?;
    Ok(environment)
}
