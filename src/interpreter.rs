/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// calls functions. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, control flow and the `main` entry point.
/// - Reports runtime errors such as type mismatches or writes to constants.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, punctuation, annotations and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, source text
///   and 1-based line and column.
/// - Handles numeric and string literals, identifiers, operators and
///   comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates grammar, reporting what was expected and what was found.
/// - Supports declarations, assignments, functions, control flow and
///   composite literals.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values produced during execution (integers,
/// floats, text, booleans, `null`, arrays and objects) and the declared
/// types checked against them.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, rendering, and loose equality and ordering.
/// - Defines the `TypeTag` predicates used by declarations and signatures.
pub mod value;
