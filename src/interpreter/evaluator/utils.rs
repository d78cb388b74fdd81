use crate::{
    ast::{Position, TypeAnnotation},
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            core::Value,
            types::{TypeTag, UnknownType},
        },
    },
};

/// Checks `value` against a declared type.
///
/// `subject` names what is being checked, such as `Variable 'age'`, and
/// starts the error message.
///
/// # Errors
/// `TypeError` if the type name is unknown or the type does not admit the
/// value.
pub fn check_type(annotation: &TypeAnnotation,
                  value: &Value,
                  subject: &str,
                  position: Position)
                  -> EvalResult<()> {
    let tag = annotation.name
                        .parse::<TypeTag>()
                        .map_err(|UnknownType(name)| RuntimeError::TypeError {
                            details:  format!("Unknown type '{name}'"),
                            position: annotation.position,
                        })?;

    if tag.admits(value) {
        return Ok(());
    }

    Err(RuntimeError::TypeError { details: format!("{subject} expects {tag}, found {}",
                                                   value.kind_name()),
                                  position })
}

/// Joins values with single spaces, as the output built-ins print them.
#[must_use]
pub fn join_values(values: &[Value]) -> String {
    values.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
