use std::iter::Peekable;

use crate::{
    ast::{Branch, Statement},
    interpreter::{
        lexer::{Keyword, Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            statement::parse_statement,
            utils::{expect_punctuation, expected_error},
        },
    },
};

/// Parses a block delimited by braces.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Errors
/// Returns a `ParseError` if `{` is missing, a statement fails to parse, or
/// input ends before the closing `}`.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect_punctuation(tokens, '{')?;

    let mut statements = Vec::new();
    loop {
        match tokens.peek().copied() {
            Some(token) if token.is_punctuation('}') => {
                tokens.next();
                return Ok(statements);
            },
            Some(token) if token.kind != TokenKind::Eof => {
                statements.push(parse_statement(tokens)?);
            },
            found => return Err(expected_error("'}'", found)),
        }
    }
}

/// Consumes the optional `->` between a control keyword and its header.
fn skip_header_arrow<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    if tokens.peek().is_some_and(|token| token.kind == TokenKind::Keyword(Keyword::Return)) {
        tokens.next();
    }
}

fn parse_branch<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Branch>
    where I: Iterator<Item = &'a Token> + Clone
{
    skip_header_arrow(tokens);
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;
    Ok(Branch { condition, body })
}

/// Parses a conditional with any number of `elif` arms and an optional
/// `else`.
///
/// Syntax:
/// ```text
/// if -> condition { ... }
/// elif -> condition { ... }
/// else { ... }
/// ```
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = tokens.next().ok_or_else(|| expected_error("'if'", None))?;

    let mut branches = vec![parse_branch(tokens)?];
    let mut otherwise = None;

    loop {
        match tokens.peek().map(|token| &token.kind) {
            Some(TokenKind::Keyword(Keyword::Elif)) => {
                tokens.next();
                branches.push(parse_branch(tokens)?);
            },
            Some(TokenKind::Keyword(Keyword::Else)) => {
                tokens.next();
                otherwise = Some(parse_block(tokens)?);
                break;
            },
            _ => break,
        }
    }

    Ok(Statement::If { branches,
                       otherwise,
                       position: keyword.position() })
}

/// Parses `while -> condition { body }`.
pub fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = tokens.next().ok_or_else(|| expected_error("'while'", None))?;
    let Branch { condition, body } = parse_branch(tokens)?;

    Ok(Statement::While { condition,
                          body,
                          position: keyword.position() })
}

/// Parses `for -> init ; condition ; update { body }`.
///
/// `init` and `update` are full statements, normally a declaration or an
/// assignment.
pub fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = tokens.next().ok_or_else(|| expected_error("'for'", None))?;
    skip_header_arrow(tokens);

    let init = parse_statement(tokens)?;
    expect_punctuation(tokens, ';')?;
    let condition = parse_expression(tokens)?;
    expect_punctuation(tokens, ';')?;
    let update = parse_statement(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::For { init: Box::new(init),
                        condition,
                        update: Box::new(update),
                        body,
                        position: keyword.position() })
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::{
        ast::{Program, Statement},
        interpreter::{lexer::tokenize, parser::core::parse},
    };

    fn parse_source(source: &str) -> Program {
        parse(&tokenize(source).unwrap()).unwrap()
    }

    #[test]
    fn if_elif_else_chain() {
        let program = parse_source("if -> a { x <== 1 } elif -> b { x <== 2 } elif c { } else { x <== 3 }");
        let Statement::If { branches, otherwise, .. } = &program.body[0] else {
            panic!("expected an if statement");
        };
        assert_eq!(branches.len(), 3);
        assert_eq!(otherwise.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn for_loop_header() {
        let program = parse_source("for -> <var int> i <== 0 ; i < 3 ; i <== i + 1 { print(i) }");
        let Statement::For { init, update, body, .. } = &program.body[0] else {
            panic!("expected a for statement");
        };
        assert!(matches!(init.as_ref(), Statement::VariableDeclaration { .. }));
        assert!(matches!(update.as_ref(), Statement::Assignment { .. }));
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn while_loop() {
        let program = parse_source("while -> n > 0 { n <== n - 1 }");
        assert!(matches!(&program.body[0], Statement::While { body, .. } if body.len() == 1));
    }
}
