use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, Operator, UnaryOperator},
    interpreter::{
        lexer::{Number, Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_punctuation, expected_error, parse_comma_separated, parse_identifier,
                    peek_punctuation},
        },
    },
};

/// Parses a unary expression.
///
/// Prefix negation (`<!!>` or `!!`) binds tighter than any binary operator
/// and may be repeated. Anything else falls through to a postfix expression.
///
/// Grammar: `unary := ("<!!>" | "!!") unary | postfix`
///
/// # Example
/// ```
/// use arrow_lang::{
///     ast::{Expr, UnaryOperator},
///     interpreter::{lexer::tokenize, parser::unary::parse_unary},
/// };
///
/// let tokens = tokenize("<!!> done").unwrap();
/// let expr = parse_unary(&mut tokens.iter().peekable()).unwrap();
///
/// assert!(matches!(expr, Expr::Unary { op: UnaryOperator::Not, .. }));
/// ```
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.peek().copied()
       && token.is_operator(Operator::Not)
    {
        tokens.next();
        let operand = parse_unary(tokens)?;
        return Ok(Expr::Unary { op:       UnaryOperator::Not,
                                operand:  Box::new(operand),
                                position: token.position(), });
    }

    parse_postfix(tokens)
}

/// Parses a primary expression followed by any number of `[index]` and
/// `.property` suffixes.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut expr = parse_primary(tokens)?;

    loop {
        if peek_punctuation(tokens, '[') {
            let open = expect_punctuation(tokens, '[')?;
            let index = parse_expression(tokens)?;
            expect_punctuation(tokens, ']')?;
            expr = Expr::Index { target:   Box::new(expr),
                                 index:    Box::new(index),
                                 position: open.position(), };
        } else if peek_punctuation(tokens, '.') {
            tokens.next();
            let (property, position) = parse_identifier(tokens)?;
            expr = Expr::Member { target: Box::new(expr),
                                  property,
                                  position };
        } else {
            return Ok(expr);
        }
    }
}

/// Parses a primary expression.
///
/// Primaries are:
/// - numeric and string literals,
/// - `true`, `false` and `null`,
/// - a variable reference, or a call when the name is followed by `(`,
/// - a parenthesised expression,
/// - an array literal `[a, b]`,
/// - an object literal `{ key: value }` whose keys are identifiers or
///   strings.
///
/// # Errors
/// Returns a `ParseError` expecting an expression when none of the forms
/// above starts at the next token.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.next() else {
        return Err(expected_error("expression", None));
    };
    let position = token.position();

    match &token.kind {
        TokenKind::Number(Number::Integer(value)) => Ok(Expr::Literal { value: (*value).into(),
                                                                        position }),
        TokenKind::Number(Number::Float(value)) => Ok(Expr::Literal { value: (*value).into(),
                                                                      position }),
        TokenKind::String(text) => Ok(Expr::Literal { value: text.as_str().into(),
                                                      position }),
        TokenKind::Identifier(name) => match name.as_str() {
            "true" => Ok(Expr::Literal { value: true.into(),
                                         position }),
            "false" => Ok(Expr::Literal { value: false.into(),
                                          position }),
            "null" => Ok(Expr::Literal { value: LiteralValue::Null,
                                         position }),
            _ if peek_punctuation(tokens, '(') => {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, ')')?;
                Ok(Expr::Call { callee: name.clone(),
                                arguments,
                                position })
            },
            _ => Ok(Expr::Variable { name: name.clone(),
                                     position }),
        },
        TokenKind::Punctuation('(') => {
            let expr = parse_expression(tokens)?;
            expect_punctuation(tokens, ')')?;
            Ok(expr)
        },
        TokenKind::Punctuation('[') => {
            let elements = parse_comma_separated(tokens, parse_expression, ']')?;
            Ok(Expr::Array { elements, position })
        },
        TokenKind::Punctuation('{') => {
            let fields = parse_comma_separated(tokens, parse_field, '}')?;
            Ok(Expr::Object { fields, position })
        },
        _ => Err(expected_error("expression", Some(token))),
    }
}

/// Parses one `key: value` pair of an object literal.
fn parse_field<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, Expr)>
    where I: Iterator<Item = &'a Token> + Clone
{
    let key = match tokens.next() {
        Some(Token { kind: TokenKind::Identifier(name) | TokenKind::String(name),
                     .. }) => name.clone(),
        found => return Err(expected_error("property name", found)),
    };
    expect_punctuation(tokens, ':')?;
    let value = parse_expression(tokens)?;
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::{ast::Position, error::ParseError, interpreter::lexer::tokenize};

    fn parse_source(source: &str) -> ParseResult<Expr> {
        let tokens = tokenize(source).unwrap();
        parse_unary(&mut tokens.iter().peekable())
    }

    #[test]
    fn negation_nests() {
        let expr = parse_source("!! <!!> flag").unwrap();
        let Expr::Unary { operand, .. } = expr else {
            panic!("expected a unary expression");
        };
        assert!(matches!(*operand, Expr::Unary { .. }));
    }

    #[test]
    fn keyword_literals() {
        assert!(matches!(parse_source("true").unwrap(),
                         Expr::Literal { value: LiteralValue::Bool(true), .. }));
        assert!(matches!(parse_source("null").unwrap(),
                         Expr::Literal { value: LiteralValue::Null, .. }));
    }

    #[test]
    fn call_with_arguments() {
        let expr = parse_source("max(1, x, \"y\")").unwrap();
        assert!(matches!(expr, Expr::Call { callee, arguments, .. }
                               if callee == "max" && arguments.len() == 3));
    }

    #[test]
    fn postfix_chain() {
        let expr = parse_source("config.items[0].length").unwrap();
        let Expr::Member { target, property, .. } = expr else {
            panic!("expected a member access");
        };
        assert_eq!(property, "length");
        assert!(matches!(*target, Expr::Index { .. }));
    }

    #[test]
    fn composite_literals() {
        assert!(matches!(parse_source("[1, [2], []]").unwrap(),
                         Expr::Array { elements, .. } if elements.len() == 3));
        assert!(matches!(parse_source("{ volume: 75, \"theme\": \"dark\" }").unwrap(),
                         Expr::Object { fields, .. } if fields[1].0 == "theme"));
    }

    #[test]
    fn missing_operand() {
        let err = parse_source("<!!> )").unwrap_err();
        assert_eq!(err,
                   ParseError::Expected { expected: "expression".to_string(),
                                          found:    "')'".to_string(),
                                          position: Position::new(1, 6), });
    }
}
