use std::{fmt, str::FromStr};

use crate::interpreter::value::core::Value;

/// A declared type.
///
/// A tag is a predicate over [`Value`]: declarations, parameters and return
/// types check the value they receive with [`TypeTag::admits`]. The `const`
/// modifier is not part of the tag; it decides mutability, not admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// `int`: integers.
    Int,
    /// `float`: floats and integers.
    Float,
    /// `str`: text.
    Str,
    /// `bool`: booleans.
    Bool,
    /// `null`: only `null`.
    Null,
    /// `array`: arrays.
    Array,
    /// `obj`: objects.
    Object,
    /// `any`: every value.
    Any,
}

/// Type names in the order they are documented.
const TYPE_NAMES: &[(&str, TypeTag)] = &[("int", TypeTag::Int),
                                         ("float", TypeTag::Float),
                                         ("str", TypeTag::Str),
                                         ("bool", TypeTag::Bool),
                                         ("null", TypeTag::Null),
                                         ("array", TypeTag::Array),
                                         ("obj", TypeTag::Object),
                                         ("any", TypeTag::Any)];

impl TypeTag {
    /// Tests whether `value` belongs to this type.
    ///
    /// # Example
    /// ```
    /// use arrow_lang::interpreter::value::{core::Value, types::TypeTag};
    ///
    /// assert!(TypeTag::Float.admits(&Value::Integer(3)));
    /// assert!(!TypeTag::Int.admits(&Value::Float(3.0)));
    /// assert!(TypeTag::Any.admits(&Value::Null));
    /// ```
    #[must_use]
    pub const fn admits(self, value: &Value) -> bool {
        matches!((self, value),
                 (Self::Any, _)
                 | (Self::Int, Value::Integer(_))
                 | (Self::Float, Value::Float(_) | Value::Integer(_))
                 | (Self::Str, Value::Text(_))
                 | (Self::Bool, Value::Bool(_))
                 | (Self::Null, Value::Null)
                 | (Self::Array, Value::Array(_))
                 | (Self::Object, Value::Object(_)))
    }
}

/// Error returned when parsing an unknown type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownType(pub String);

impl FromStr for TypeTag {
    type Err = UnknownType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TYPE_NAMES.iter()
                  .find(|(name, _)| *name == s)
                  .map(|(_, tag)| *tag)
                  .ok_or_else(|| UnknownType(s.to_string()))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = TYPE_NAMES.iter()
                             .find(|(_, tag)| tag == self)
                             .map_or("any", |(name, _)| name);
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn names_round_trip() {
        for (name, tag) in TYPE_NAMES {
            assert_eq!(name.parse::<TypeTag>(), Ok(*tag));
            assert_eq!(tag.to_string(), *name);
        }
        assert_eq!("integer".parse::<TypeTag>(), Err(UnknownType("integer".to_string())));
    }

    #[test]
    fn only_any_and_null_admit_null() {
        let admitting: Vec<_> = TYPE_NAMES.iter()
                                          .filter(|(_, tag)| tag.admits(&Value::Null))
                                          .map(|(name, _)| *name)
                                          .collect();
        assert_eq!(admitting, ["null", "any"]);
    }
}
