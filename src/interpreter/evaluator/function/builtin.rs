use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::usize_to_i64,
};

/// Returns the length of an array, text or object.
///
/// Text length counts characters, not bytes. Objects count their keys.
///
/// # Errors
/// `TypeError` for any other kind of value.
///
/// # Example
/// ```
/// use arrow_lang::{
///     ast::Position,
///     interpreter::{evaluator::function::builtin::len, value::core::Value},
/// };
///
/// let items = Value::from(vec![Value::Integer(10), Value::Integer(20)]);
/// assert_eq!(len(&[items], Position::new(1, 1)).unwrap(), Value::Integer(2));
/// assert_eq!(len(&[Value::from("héllo")], Position::new(1, 1)).unwrap(), Value::Integer(5));
/// ```
pub fn len(args: &[Value], position: Position) -> EvalResult<Value> {
    let length = match &args[0] {
        Value::Array(items) => items.len(),
        Value::Text(text) => text.chars().count(),
        Value::Object(fields) => fields.len(),
        other => {
            return Err(RuntimeError::TypeError { details: format!("Cannot take the length of {}",
                                                                  other.kind_name()),
                                                 position });
        },
    };
    Ok(Value::Integer(usize_to_i64(length)))
}

/// Converts a value to its textual form, the same text `print` writes.
///
/// # Example
/// ```
/// use arrow_lang::interpreter::{evaluator::function::builtin::str, value::core::Value};
///
/// assert_eq!(str(&[Value::Float(2.5)]), Value::from("2.5"));
/// ```
#[must_use]
pub fn str(args: &[Value]) -> Value {
    Value::Text(args[0].to_string())
}
