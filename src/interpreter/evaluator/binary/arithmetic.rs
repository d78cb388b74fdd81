use crate::{
    ast::{Operator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::unknown_operator, core::EvalResult},
        value::core::Value,
    },
    util::num::i64_to_f64,
};

/// Evaluates `<+>`, `<->`, `<*>` or `</>`.
///
/// - `<+>` with a text on either side concatenates the textual forms of both
///   operands.
/// - Two integers stay integers for `<+>`, `<->` and `<*>` unless the result
///   overflows, in which case the float result is produced instead.
/// - `</>` on two integers yields an integer only when the division is
///   exact; otherwise, and for a zero divisor, it is IEEE-754 float division,
///   so `1 </> 0` is `Infinity` and `0 </> 0` is `NaN`.
/// - Any other pair of numbers is computed in floating point.
///
/// # Errors
/// `TypeError` when an operand is not a number and the operation is not a
/// concatenation.
///
/// # Example
/// ```
/// use arrow_lang::{
///     ast::{Operator, Position},
///     interpreter::{evaluator::binary::arithmetic::eval_arithmetic, value::core::Value},
/// };
///
/// let at = Position::new(1, 1);
///
/// let half = eval_arithmetic(Operator::Div, &Value::Integer(1), &Value::Integer(2), at);
/// assert_eq!(half.unwrap(), Value::Float(0.5));
///
/// let text = eval_arithmetic(Operator::Add, &Value::from("n = "), &Value::Integer(2), at);
/// assert_eq!(text.unwrap(), Value::from("n = 2"));
/// ```
pub fn eval_arithmetic(op: Operator,
                       left: &Value,
                       right: &Value,
                       position: Position)
                       -> EvalResult<Value> {
    use Value::{Float, Integer, Text};

    match (left, right) {
        (Text(_), _) | (_, Text(_)) if op == Operator::Add => {
            Ok(Text(format!("{left}{right}")))
        },
        (Integer(a), Integer(b)) => match integer_op(op, *a, *b) {
            Some(result) => Ok(Integer(result)),
            None => Ok(Float(float_op(op, i64_to_f64(*a), i64_to_f64(*b), position)?)),
        },
        _ => match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => Ok(Float(float_op(op, a, b, position)?)),
            _ => {
                Err(RuntimeError::TypeError { details: format!("Cannot apply '{op}' to {} and {}",
                                                               left.kind_name(),
                                                               right.kind_name()),
                                              position })
            },
        },
    }
}

/// Integer result of `a op b`, or `None` when it does not fit or is not a
/// whole number.
fn integer_op(op: Operator, a: i64, b: i64) -> Option<i64> {
    match op {
        Operator::Add => a.checked_add(b),
        Operator::Sub => a.checked_sub(b),
        Operator::Mul => a.checked_mul(b),
        Operator::Div => match a.checked_rem(b) {
            Some(0) => a.checked_div(b),
            _ => None,
        },
        _ => None,
    }
}

fn float_op(op: Operator, a: f64, b: f64, position: Position) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div => Ok(a / b),
        _ => Err(unknown_operator(op, position)),
    }
}
