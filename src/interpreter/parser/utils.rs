use std::iter::Peekable;

use crate::{
    ast::{Operator, Position, TypeAnnotation},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Builds the error for a missing token.
///
/// `found` is `None` only when a hand-built token slice ends without
/// [`TokenKind::Eof`]; it is reported as end of input at the origin.
pub(in crate::interpreter::parser) fn expected_error(expected: &str,
                                                     found: Option<&Token>)
                                                     -> ParseError {
    ParseError::Expected { expected: expected.to_string(),
                           found:    found.map_or_else(|| "end of input".to_string(),
                                                       Token::describe),
                           position: found.map_or_else(Position::default, Token::position), }
}

/// Returns `true` if the next token is `Punctuation(c)`.
pub(in crate::interpreter::parser) fn peek_punctuation<'a, I>(tokens: &mut Peekable<I>,
                                                              c: char)
                                                              -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().is_some_and(|token| token.is_punctuation(c))
}

/// Returns `true` if the next token is `Operator(op)`.
pub(in crate::interpreter::parser) fn peek_operator<'a, I>(tokens: &mut Peekable<I>,
                                                           op: Operator)
                                                           -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().is_some_and(|token| token.is_operator(op))
}

/// Consumes `Punctuation(c)` or fails naming it.
pub(in crate::interpreter::parser) fn expect_punctuation<'a, I>(tokens: &mut Peekable<I>,
                                                                c: char)
                                                                -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.is_punctuation(c) => Ok(token),
        found => Err(expected_error(&format!("'{c}'"), found)),
    }
}

/// Consumes `Operator(op)` or fails naming its lexeme.
pub(in crate::interpreter::parser) fn expect_operator<'a, I>(tokens: &mut Peekable<I>,
                                                             op: Operator)
                                                             -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.is_operator(op) => Ok(token),
        found => Err(expected_error(&format!("'{op}'"), found)),
    }
}

/// Parses a plain identifier and returns its name and position.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) => match &token.kind {
            TokenKind::Identifier(name) => Ok((name.clone(), token.position())),
            _ => Err(expected_error("identifier", Some(token))),
        },
        None => Err(expected_error("identifier", None)),
    }
}

/// Words that lex as identifiers but always read back as literals.
const LITERAL_WORDS: &[&str] = &["true", "false", "null"];

/// Parses the name a declaration, assignment or parameter binds.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier, or is
/// one of `true`, `false` and `null`, which could never be read back.
pub(in crate::interpreter::parser) fn parse_binding_name<'a, I>(tokens: &mut Peekable<I>)
                                                                -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.peek().copied()
       && let TokenKind::Identifier(name) = &token.kind
       && LITERAL_WORDS.contains(&name.as_str())
    {
        return Err(expected_error("variable name", Some(token)));
    }
    parse_identifier(tokens)
}

/// Parses a comma-separated list of items until a closing punctuation mark.
///
/// This utility is shared by array literals, object literals, argument lists
/// and parameter lists. It repeatedly calls `parse_item` to parse one
/// element, expecting either a comma, to continue the list, or the closing
/// mark, to end it. An immediately encountered closing mark produces an empty
/// list. The opening mark must already be consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, or if anything other
/// than `,` or the closing mark follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: char)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();
    if peek_punctuation(tokens, closing) {
        tokens.next();
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(token) if token.is_punctuation(',') => {},
            Some(token) if token.is_punctuation(closing) => break,
            found => return Err(expected_error(&format!("',' or '{closing}'"), found)),
        }
    }
    Ok(items)
}

/// Parses a type annotation of the form `<: T :>` or `<: const T :>`.
///
/// The `<:` must be the next token.
pub(in crate::interpreter::parser) fn parse_type_annotation<'a, I>(tokens: &mut Peekable<I>)
                                                                   -> ParseResult<TypeAnnotation>
    where I: Iterator<Item = &'a Token>
{
    expect_operator(tokens, Operator::TypeOpen)?;

    let (mut name, mut position) = parse_identifier(tokens)?;
    let constant = name == "const";
    if constant {
        (name, position) = parse_identifier(tokens)?;
    }

    expect_operator(tokens, Operator::TypeClose)?;
    Ok(TypeAnnotation { name,
                        constant,
                        position })
}
