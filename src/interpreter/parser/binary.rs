use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses a chain of binary operations.
///
/// Every binary operator sits at the same level and associates to the left,
/// so operators apply in the order they are written: `10 <+> 5 <*> 2` is
/// `(10 <+> 5) <*> 2`. Parenthesise to group differently.
///
/// The rule is: `binary := unary (operator unary)*`
///
/// # Example
/// ```
/// use arrow_lang::{
///     ast::{Expr, Operator},
///     interpreter::{lexer::tokenize, parser::binary::parse_binary},
/// };
///
/// let tokens = tokenize("a + b * c").unwrap();
/// let expr = parse_binary(&mut tokens.iter().peekable()).unwrap();
///
/// let Expr::Binary { op, left, .. } = expr else { unreachable!() };
/// assert_eq!(op, Operator::Mul);
/// assert!(matches!(*left, Expr::Binary { op: Operator::Add, .. }));
/// ```
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_unary(tokens)?;

    while let Some(token) = tokens.peek().copied()
          && let TokenKind::Operator(op) = token.kind
          && op.is_binary()
    {
        tokens.next();
        let right = parse_unary(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              position: token.position() };
    }

    Ok(left)
}
