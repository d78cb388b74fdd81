use std::rc::Rc;

use crate::{
    ast::{Expr, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            console::Console,
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
    util::num::{index_to_usize, usize_to_i64},
};

impl<C: Console> Evaluator<C> {
    /// Evaluates the elements of an array literal, left to right.
    pub(crate) fn eval_array_literal(&mut self, elements: &[Expr]) -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|element| self.eval(element))
                             .collect::<EvalResult<Vec<_>>>()?;
        Ok(values.into())
    }

    /// Evaluates an object literal. A repeated key keeps its first position
    /// and its last value.
    pub(crate) fn eval_object_literal(&mut self, fields: &[(String, Expr)]) -> EvalResult<Value> {
        let mut object: Vec<(String, Value)> = Vec::with_capacity(fields.len());

        for (key, expr) in fields {
            let value = self.eval(expr)?;
            match object.iter_mut().find(|(existing, _)| existing == key) {
                Some((_, slot)) => *slot = value,
                None => object.push((key.clone(), value)),
            }
        }

        Ok(Value::Object(Rc::new(object)))
    }

    /// Evaluates `target[index]`.
    pub(crate) fn eval_index(&mut self,
                             target: &Expr,
                             index: &Expr,
                             position: Position)
                             -> EvalResult<Value> {
        let target = self.eval(target)?;
        let index = self.eval(index)?;
        index_value(&target, &index, position)
    }

    /// Evaluates `target.property`.
    pub(crate) fn eval_member(&mut self,
                              target: &Expr,
                              property: &str,
                              position: Position)
                              -> EvalResult<Value> {
        let target = self.eval(target)?;
        member_value(&target, property, position)
    }
}

/// Reads one element of an indexable value.
///
/// - Arrays are indexed by integer and yield the element.
/// - Text is indexed by integer and yields the character at that position
///   as text.
/// - Objects are indexed by text and yield the value under that key.
///
/// # Errors
/// - `IndexOutOfBounds` for a negative index or one past the end.
/// - `UnknownProperty` for a missing object key.
/// - `TypeError` for any other combination of target and index.
///
/// # Example
/// ```
/// use arrow_lang::{
///     ast::Position,
///     interpreter::{evaluator::collection::index_value, value::core::Value},
/// };
///
/// let items = Value::from(vec![Value::Integer(10), Value::Integer(20)]);
/// let at = Position::new(1, 1);
///
/// assert_eq!(index_value(&items, &Value::Integer(1), at).unwrap(), Value::Integer(20));
/// assert!(index_value(&items, &Value::Integer(2), at).is_err());
/// ```
pub fn index_value(target: &Value, index: &Value, position: Position) -> EvalResult<Value> {
    match (target, index) {
        (Value::Array(items), Value::Integer(i)) => {
            index_to_usize(*i, items.len()).and_then(|i| items.get(i))
                                           .cloned()
                                           .ok_or(RuntimeError::IndexOutOfBounds { index: *i,
                                                                                   length:
                                                                                       items.len(),
                                                                                   position })
        },
        (Value::Text(text), Value::Integer(i)) => {
            let length = text.chars().count();
            index_to_usize(*i, length).and_then(|i| text.chars().nth(i))
                                      .map(|c| Value::Text(c.to_string()))
                                      .ok_or(RuntimeError::IndexOutOfBounds { index: *i,
                                                                              length,
                                                                              position })
        },
        (Value::Object(_), Value::Text(key)) => member_value(target, key, position),
        _ => Err(RuntimeError::TypeError { details: format!("Cannot index {} with {}",
                                                            target.kind_name(),
                                                            index.kind_name()),
                                           position }),
    }
}

/// Reads a property.
///
/// Objects expose their keys. Arrays and text expose `length`, the same
/// count [`len`](crate::interpreter::evaluator::function::builtin::len)
/// returns.
///
/// # Errors
/// `UnknownProperty` if the value has no such property.
pub fn member_value(target: &Value, property: &str, position: Position) -> EvalResult<Value> {
    let found = match target {
        Value::Object(fields) => {
            fields.iter()
                  .find(|(key, _)| key == property)
                  .map(|(_, value)| value.clone())
        },
        Value::Array(items) if property == "length" => Some(Value::Integer(usize_to_i64(items.len()))),
        Value::Text(text) if property == "length" => {
            Some(Value::Integer(usize_to_i64(text.chars().count())))
        },
        _ => None,
    };

    found.ok_or_else(|| RuntimeError::UnknownProperty { property: property.to_string(),
                                                        position })
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    const AT: Position = Position::new(2, 4);

    fn settings() -> Value {
        Value::Object(Rc::new(vec![("volume".to_string(), Value::Integer(75)),
                                   ("theme".to_string(), Value::from("dark"))]))
    }

    #[test]
    fn object_access_by_member_and_index() {
        assert_eq!(member_value(&settings(), "theme", AT).unwrap(), Value::from("dark"));
        assert_eq!(index_value(&settings(), &Value::from("volume"), AT).unwrap(),
                   Value::Integer(75));
    }

    #[test]
    fn missing_key_is_unknown_property() {
        let err = member_value(&settings(), "brightness", AT).unwrap_err();
        assert_eq!(err.to_string(), "Unknown property 'brightness' at line 2, column 4");
    }

    #[test]
    fn text_indexing_counts_characters() {
        let word = Value::from("naïve");
        assert_eq!(index_value(&word, &Value::Integer(2), AT).unwrap(), Value::from("ï"));
        assert_eq!(member_value(&word, "length", AT).unwrap(), Value::Integer(5));
    }

    #[test]
    fn negative_index_is_out_of_bounds() {
        let items = Value::from(vec![Value::Null]);
        assert!(matches!(index_value(&items, &Value::Integer(-1), AT),
                         Err(RuntimeError::IndexOutOfBounds { index: -1, length: 1, .. })));
    }

    #[test]
    fn float_index_is_a_type_error() {
        let items = Value::from(vec![Value::Null]);
        assert!(matches!(index_value(&items, &Value::Float(0.0), AT),
                         Err(RuntimeError::TypeError { .. })));
    }
}
