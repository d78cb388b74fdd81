use crate::{
    ast::{Operator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{arithmetic::eval_arithmetic, comparison::eval_comparison, logic::eval_logic},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two values.
///
/// Routes the operation to a specialized handler: arithmetic for
/// `<+> <-> <*> </>`, comparison for `<=> <!=> <>> <<> <>=> <<=>`, and logic
/// for `<&&> <||>`. Both operands are already evaluated.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Location of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Errors
/// `UnknownOperator` if `op` is not a binary operator, or whatever the
/// handler raises.
///
/// # Example
/// ```
/// use arrow_lang::{
///     ast::{Operator, Position},
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let result = eval_binary(Operator::Add,
///                          &Value::Integer(3),
///                          &Value::Integer(4),
///                          Position::new(1, 3));
/// assert_eq!(result.unwrap(), Value::Integer(7));
/// ```
pub fn eval_binary(op: Operator,
                   left: &Value,
                   right: &Value,
                   position: Position)
                   -> EvalResult<Value> {
    use Operator::{
        Add, And, Assign, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, Not,
        NotEqual, Or, Sub, TypeClose, TypeOpen,
    };

    match op {
        Add | Sub | Mul | Div => eval_arithmetic(op, left, right, position),
        Equal | NotEqual | Greater | Less | GreaterEqual | LessEqual => {
            eval_comparison(op, left, right, position)
        },
        And | Or => eval_logic(op, left, right, position),
        Assign | TypeOpen | TypeClose | Not => Err(unknown_operator(op, position)),
    }
}

/// The error for an operator that reached a handler it does not belong to.
pub(in crate::interpreter::evaluator) fn unknown_operator(op: Operator,
                                                          position: Position)
                                                          -> RuntimeError {
    RuntimeError::UnknownOperator { lexeme: op.to_string(),
                                    position }
}
