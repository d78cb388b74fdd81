use std::{collections::HashSet, iter::Peekable};

use crate::{
    ast::{Expr, FunctionDef, LiteralValue, Mutability, Operator, Parameter, Statement,
          TypeAnnotation},
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token, TokenKind},
        parser::{
            block::{parse_block, parse_for, parse_if, parse_while},
            core::{ParseResult, parse_expression},
            utils::{expect_punctuation, expected_error, parse_binding_name,
                    parse_comma_separated, parse_identifier, parse_type_annotation,
                    peek_operator, peek_punctuation},
        },
    },
};

/// Parses a single statement.
///
/// The first token decides what follows:
/// - `<var ...>`, `<const ...>` or `<T>`: a variable declaration.
/// - `<... fn>`: a function declaration.
/// - `->`: a return statement.
/// - `if`, `while`, `for`: control flow.
/// - an identifier: a declaration (`name <: T :>`), an assignment
///   (`name <== ...`) or a call statement (`name(...)`), decided by the
///   token after it.
///
/// # Errors
/// Returns a `ParseError` naming the expected construct when none of the
/// forms above starts here.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(expected_error("statement", None));
    };

    match &token.kind {
        TokenKind::Keyword(Keyword::Var(ty)) => {
            tokens.next();
            parse_variable_declaration(tokens, token, Mutability::Var, ty.as_deref())
        },
        TokenKind::Keyword(Keyword::Const(ty)) => {
            tokens.next();
            parse_variable_declaration(tokens, token, Mutability::Const, ty.as_deref())
        },
        TokenKind::Keyword(Keyword::Fn(ty)) => {
            tokens.next();
            parse_function_declaration(tokens, token, ty.as_deref())
        },
        TokenKind::Keyword(Keyword::Return) => {
            tokens.next();
            parse_return(tokens, token)
        },
        TokenKind::Keyword(Keyword::If) => parse_if(tokens),
        TokenKind::Keyword(Keyword::While) => parse_while(tokens),
        TokenKind::Keyword(Keyword::For) => parse_for(tokens),
        TokenKind::Identifier(_) => parse_identifier_statement(tokens, token),
        _ => Err(expected_error("statement", Some(token))),
    }
}

/// Parses a statement that starts with an identifier.
///
/// Looks one token past the identifier without consuming anything, then
/// commits to one form.
fn parse_identifier_statement<'a, I>(tokens: &mut Peekable<I>,
                                     start: &'a Token)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();

    match lookahead.peek().copied() {
        Some(next) if next.is_operator(Operator::TypeOpen) => {
            parse_variable_declaration(tokens, start, Mutability::Var, None)
        },
        Some(next) if next.is_operator(Operator::Assign) => {
            let (name, position) = parse_binding_name(tokens)?;
            tokens.next();
            let value = parse_expression(tokens)?;
            Ok(Statement::Assignment { name,
                                       value,
                                       position })
        },
        Some(next) if next.is_punctuation('(') => {
            let expr = parse_expression(tokens)?;
            Ok(Statement::Expression { expr,
                                       position: start.position() })
        },
        found => Err(expected_error("'<==', '<:' or '('", found)),
    }
}

/// Parses the rest of a variable declaration once the keyword, if any, is
/// consumed.
///
/// Forms:
/// - `<const int> name <== expression`
/// - `<var> name <: int :> <== expression`
/// - `name <: const int :> <== expression`
/// - `<var> name` (initialised to `null`)
///
/// A type may be given in the keyword or in a `<: :>` annotation, not both.
/// A `const` annotation makes the binding constant whatever the keyword.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     start: &'a Token,
                                     mut kind: Mutability,
                                     keyword_type: Option<&str>)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let (name, _) = parse_binding_name(tokens)?;

    let mut declared_type =
        keyword_type.map(|ty| TypeAnnotation { name:     ty.to_string(),
                                                constant: kind == Mutability::Const,
                                                position: start.position(), });

    if peek_operator(tokens, Operator::TypeOpen) {
        if declared_type.is_some() {
            return Err(expected_error("'<=='", tokens.peek().copied()));
        }
        let annotation = parse_type_annotation(tokens)?;
        if annotation.constant {
            kind = Mutability::Const;
        }
        declared_type = Some(annotation);
    }

    let init = if peek_operator(tokens, Operator::Assign) {
        tokens.next();
        parse_expression(tokens)?
    } else {
        Expr::Literal { value:    LiteralValue::Null,
                        position: start.position(), }
    };

    Ok(Statement::VariableDeclaration { kind,
                                        name,
                                        declared_type,
                                        init,
                                        position: start.position() })
}

/// Parses a function declaration after its `<... fn>` marker.
///
/// Grammar:
/// `function := marker identifier "(" parameters ")" annotation? block`
///
/// The return type comes from the marker (`<bool fn>`) or from a `<: T :>`
/// annotation after the parameter list, not both.
///
/// # Errors
/// Returns a `ParseError` on malformed parameters, a repeated parameter name,
/// a doubled return type or an unterminated body.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     marker: &'a Token,
                                     marker_type: Option<&str>)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let (name, _) = parse_identifier(tokens)?;

    expect_punctuation(tokens, '(')?;
    let params = parse_comma_separated(tokens, parse_parameter, ')')?;

    let mut seen = HashSet::new();
    for param in &params {
        if !seen.insert(param.name.as_str()) {
            return Err(ParseError::DuplicateParameter { name:     param.name.clone(),
                                                        position: param.position, });
        }
    }

    let mut return_type = marker_type.map(|ty| TypeAnnotation { name:     ty.to_string(),
                                                                constant: false,
                                                                position: marker.position(), });
    if peek_operator(tokens, Operator::TypeOpen) {
        if return_type.is_some() {
            return Err(expected_error("'{'", tokens.peek().copied()));
        }
        return_type = Some(parse_type_annotation(tokens)?);
    }

    let body = parse_block(tokens)?;

    Ok(Statement::Function(FunctionDef { name,
                                         params,
                                         return_type,
                                         body,
                                         position: marker.position() }))
}

/// Parses one parameter: `<const int> n`, `<int> n`, `n <: int :>` or `n`.
fn parse_parameter<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Parameter>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = tokens.peek().copied();
    let (mut mutability, keyword_type) = match keyword.map(|token| &token.kind) {
        Some(TokenKind::Keyword(Keyword::Const(ty))) => (Mutability::Const, Some(ty)),
        Some(TokenKind::Keyword(Keyword::Var(ty))) => (Mutability::Var, Some(ty)),
        _ => (Mutability::Var, None),
    };

    let mut declared_type = None;
    if let (Some(ty), Some(keyword)) = (keyword_type, keyword) {
        tokens.next();
        declared_type = ty.as_ref().map(|name| TypeAnnotation { name:     name.clone(),
                                                                constant: mutability
                                                                          == Mutability::Const,
                                                                position: keyword.position(), });
    }

    let (name, position) = parse_binding_name(tokens)?;

    if peek_operator(tokens, Operator::TypeOpen) {
        if declared_type.is_some() {
            return Err(expected_error("',' or ')'", tokens.peek().copied()));
        }
        let annotation = parse_type_annotation(tokens)?;
        if annotation.constant {
            mutability = Mutability::Const;
        }
        declared_type = Some(annotation);
    }

    Ok(Parameter { name,
                   declared_type,
                   mutability,
                   position })
}

/// Parses the value of a `->` return once the arrow is consumed.
///
/// A bare arrow directly before `}` or end of input returns `null`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, arrow: &'a Token) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let at_end = peek_punctuation(tokens, '}')
                 || tokens.peek().is_none_or(|token| token.kind == TokenKind::Eof);

    let value = if at_end {
        Expr::Literal { value:    LiteralValue::Null,
                        position: arrow.position(), }
    } else {
        parse_expression(tokens)?
    };

    Ok(Statement::Return { value,
                           position: arrow.position() })
}
