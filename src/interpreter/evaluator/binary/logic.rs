use crate::{
    ast::{Operator, Position},
    interpreter::{
        evaluator::{binary::core::unknown_operator, core::EvalResult},
        value::core::Value,
    },
};

/// Evaluates `<&&>` or `<||>`.
///
/// Both operands are coerced by truthiness and the result is always a
/// `Value::Bool`. The operands were evaluated before this call, so neither
/// operator short-circuits.
///
/// # Example
/// ```
/// use arrow_lang::{
///     ast::{Operator, Position},
///     interpreter::{evaluator::binary::logic::eval_logic, value::core::Value},
/// };
///
/// let result = eval_logic(Operator::Or, &Value::Integer(0), &Value::from("yes"), Position::new(1, 1));
/// assert_eq!(result.unwrap(), Value::Bool(true));
/// ```
pub fn eval_logic(op: Operator,
                  left: &Value,
                  right: &Value,
                  position: Position)
                  -> EvalResult<Value> {
    match op {
        Operator::And => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        Operator::Or => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
        _ => Err(unknown_operator(op, position)),
    }
}
