use std::cmp::Ordering;

use crate::{
    ast::{Operator, Position},
    interpreter::{
        evaluator::{binary::core::unknown_operator, core::EvalResult},
        value::core::Value,
    },
};

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// Equality uses [`Value::loose_eq`] and ordering uses
/// [`Value::loose_cmp`]. Operands that have no ordering make every ordering
/// operator false, so for `"abc"` and `1` both `<<>` and `<>=>` are false.
///
/// # Returns
/// A `Value::Bool` with the outcome.
///
/// # Example
/// ```
/// use arrow_lang::{
///     ast::{Operator, Position},
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let result = eval_comparison(Operator::GreaterEqual,
///                              &Value::Integer(18),
///                              &Value::Float(17.5),
///                              Position::new(1, 1));
/// assert_eq!(result.unwrap(), Value::Bool(true));
/// ```
pub fn eval_comparison(op: Operator,
                       left: &Value,
                       right: &Value,
                       position: Position)
                       -> EvalResult<Value> {
    let ordering = || left.loose_cmp(right);

    Ok(Value::Bool(match op {
                       Operator::Equal => left.loose_eq(right),
                       Operator::NotEqual => !left.loose_eq(right),
                       Operator::Greater => ordering() == Some(Ordering::Greater),
                       Operator::Less => ordering() == Some(Ordering::Less),
                       Operator::GreaterEqual => {
                           matches!(ordering(), Some(Ordering::Greater | Ordering::Equal))
                       },
                       Operator::LessEqual => {
                           matches!(ordering(), Some(Ordering::Less | Ordering::Equal))
                       },
                       _ => return Err(unknown_operator(op, position)),
                   }))
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn compare(op: Operator, left: Value, right: Value) -> bool {
        eval_comparison(op, &left, &right, Position::new(1, 1)).unwrap() == Value::Bool(true)
    }

    #[test]
    fn numbers_compare_across_kinds() {
        assert!(compare(Operator::Equal, Value::Integer(2), Value::Float(2.0)));
        assert!(compare(Operator::Less, Value::Integer(2), Value::Float(2.5)));
        assert!(compare(Operator::LessEqual, Value::Float(2.0), Value::Integer(2)));
    }

    #[test]
    fn numeric_text_compares_as_number() {
        assert!(compare(Operator::Equal, Value::from("25"), Value::Integer(25)));
        assert!(compare(Operator::Greater, Value::Integer(30), Value::from("25")));
    }

    #[test]
    fn unordered_operands_fail_every_ordering() {
        for op in [Operator::Greater, Operator::Less, Operator::GreaterEqual, Operator::LessEqual] {
            assert!(!compare(op, Value::from("abc"), Value::Integer(1)));
            assert!(!compare(op, Value::Null, Value::Null));
        }
        assert!(compare(Operator::NotEqual, Value::from("abc"), Value::Integer(1)));
    }

    #[test]
    fn null_equals_only_null() {
        assert!(compare(Operator::Equal, Value::Null, Value::Null));
        assert!(!compare(Operator::Equal, Value::Null, Value::Bool(false)));
    }

    #[test]
    fn nan_is_never_equal() {
        assert!(!compare(Operator::Equal, Value::Float(f64::NAN), Value::Float(f64::NAN)));
    }
}
