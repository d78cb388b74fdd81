use crate::{ast::UnaryOperator, interpreter::value::core::Value};

/// Evaluates a prefix operation on an already evaluated operand.
///
/// `<!!>` yields the boolean complement of the operand's truthiness, so it
/// accepts every kind of value.
///
/// # Example
/// ```
/// use arrow_lang::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// assert_eq!(eval_unary(UnaryOperator::Not, &Value::Integer(0)), Value::Bool(true));
/// assert_eq!(eval_unary(UnaryOperator::Not, &Value::from("text")), Value::Bool(false));
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, operand: &Value) -> Value {
    match op {
        UnaryOperator::Not => Value::Bool(!operand.is_truthy()),
    }
}
