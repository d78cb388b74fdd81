use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_binary, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a [`Program`].
///
/// Comment tokens are dropped before statement dispatch, so they never reach
/// the tree. Parsing stops at [`TokenKind::Eof`] or when the slice runs out.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; no recovery is attempted.
///
/// # Example
/// ```
/// use arrow_lang::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("x <== 1\ny <== x").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.body.len(), 2);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    let mut stream = tokens.iter()
                           .filter(|token| token.kind != TokenKind::Comment)
                           .peekable();
    let mut body = Vec::new();

    while stream.peek().is_some_and(|token| token.kind != TokenKind::Eof) {
        body.push(parse_statement(&mut stream)?);
    }

    log::debug!("parsed {} top-level statements", body.len());
    Ok(Program { body })
}

/// Parses a full expression.
///
/// Grammar: `expression := unary (binary_operator unary)*`, with every binary
/// operator at the same level.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_binary(tokens)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::{
        ast::{LiteralValue, Mutability, Operator, Position, Statement},
        interpreter::lexer::tokenize,
    };

    fn parse_source(source: &str) -> ParseResult<Program> {
        parse(&tokenize(source).unwrap())
    }

    #[test]
    fn annotated_declaration_then_assignment() {
        let program = parse_source("age <: int :> <== 25\ncanVote <== age").unwrap();

        assert_eq!(program.body.len(), 2);
        assert!(matches!(&program.body[0],
                         Statement::VariableDeclaration { kind: Mutability::Var,
                                                          name,
                                                          declared_type: Some(ty),
                                                          init: Expr::Literal { value: LiteralValue::Integer(25), .. },
                                                          .. } if name == "age" && ty.name == "int"));
        assert!(matches!(&program.body[1],
                         Statement::Assignment { name, value: Expr::Variable { .. }, .. }
                         if name == "canVote"));
    }

    #[test]
    fn binary_operators_have_no_precedence() {
        let program = parse_source("result <== 10 <+> 5 <*> 2").unwrap();
        let Statement::Assignment { value, .. } = &program.body[0] else {
            panic!("expected an assignment");
        };
        let Expr::Binary { left, op, .. } = value else {
            panic!("expected a binary expression");
        };

        assert_eq!(*op, Operator::Mul);
        assert!(matches!(left.as_ref(), Expr::Binary { op: Operator::Add, .. }));
    }

    #[test]
    fn comments_produce_no_nodes() {
        let program = parse_source(":: leading\nx <== 1 ::> trailing <::\n:: done").unwrap();
        assert_eq!(program.body.len(), 1);
    }

    #[test]
    fn parsing_is_idempotent() {
        let tokens = tokenize("<bool fn> adult(<const int> age) {\n  -> age >= 18\n}\n\
                               <fn> main() { print(adult(20)) }")
                     .unwrap();
        assert_eq!(parse(&tokens).unwrap(), parse(&tokens).unwrap());
    }

    #[test]
    fn missing_assignment_arrow_names_the_location() {
        let err = parse_source("x <== 1\ny 2").unwrap_err();
        assert_eq!(err,
                   ParseError::Expected { expected: "'<==', '<:' or '('".to_string(),
                                          found:    "'2'".to_string(),
                                          position: Position::new(2, 3), });
        assert!(err.to_string().starts_with("Expected"));
    }

    #[test]
    fn literal_words_cannot_be_bound() {
        assert_eq!(parse_source("true <== 5").unwrap_err(),
                   ParseError::Expected { expected: "variable name".to_string(),
                                          found:    "'true'".to_string(),
                                          position: Position::new(1, 1), });
        assert!(parse_source("<var> null <== 1").is_err());
        assert!(parse_source("false <: bool :> <== true").is_err());
        assert!(parse_source("<fn> f(<int> null) { }").is_err());
        assert!(parse_source("truth <== true").is_ok());
    }

    #[test]
    fn unclosed_block_reports_end_of_input() {
        let err = parse_source("<fn> main() { x <== 1").unwrap_err();
        assert!(matches!(err, ParseError::Expected { ref found, .. } if found == "end of input"));
    }
}
