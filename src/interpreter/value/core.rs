use std::{cmp::Ordering, fmt, rc::Rc};

use crate::{
    ast::LiteralValue,
    util::num::{format_float, i64_to_f64, parse_number},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce: the operands of
/// operators, variable contents, arguments and function results.
/// Composite values share their storage through `Rc`, so copying a binding
/// never copies the elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double-precision float. Produced by float literals, by division
    /// that is not exact, and by integer overflow.
    Float(f64),
    /// A text value.
    Text(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators and used as conditions
    /// in `if`, `while` and `for`.
    Bool(bool),
    /// The absence of a value. Returned by functions without `->` and by
    /// the output built-ins.
    Null,
    /// An ordered list of values.
    Array(Rc<Vec<Self>>),
    /// Key/value pairs in insertion order.
    Object(Rc<Vec<(String, Self)>>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Float(f) => (*f).into(),
            LiteralValue::Text(s) => s.as_str().into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Null => Self::Null,
        }
    }
}

impl Value {
    /// Name of the value's kind, as written in type annotations.
    ///
    /// # Example
    /// ```
    /// use arrow_lang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).kind_name(), "int");
    /// assert_eq!(Value::from("x").kind_name(), "str");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "str",
            Self::Bool(_) => "bool",
            Self::Null => "null",
            Self::Array(_) => "array",
            Self::Object(_) => "obj",
        }
    }

    /// Coerces the value to a boolean.
    ///
    /// `0`, `0.0`, `NaN`, `""`, `false` and `null` are falsy. Everything
    /// else, including empty arrays and objects, is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Null => false,
            Self::Array(_) | Self::Object(_) => true,
        }
    }

    /// Returns the numeric value of an integer or float.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(i64_to_f64(*n)),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The number a value stands for when compared against a number.
    ///
    /// Booleans count as `0` and `1`; text counts if it parses as a number.
    fn coerce_number(&self) -> Option<f64> {
        match self {
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Text(s) => parse_number(s),
            _ => self.as_number(),
        }
    }

    /// Equality as the `<=>` and `<!=>` operators see it.
    ///
    /// - Numbers compare numerically, integers against floats included.
    /// - Texts, booleans and `null` compare with their own kind.
    /// - A text or boolean against a number compares the coerced number.
    /// - `null` equals only `null`.
    /// - Arrays and objects compare element by element.
    ///
    /// # Example
    /// ```
    /// use arrow_lang::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(2).loose_eq(&Value::Float(2.0)));
    /// assert!(Value::from("25").loose_eq(&Value::Integer(25)));
    /// assert!(Value::Bool(true).loose_eq(&Value::Integer(1)));
    /// assert!(!Value::Null.loose_eq(&Value::Integer(0)));
    /// ```
    #[must_use]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Null, _) | (_, Self::Null) => false,
            (Self::Array(a), Self::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.loose_eq(y))
            },
            (Self::Object(a), Self::Object(b)) => {
                a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && va.loose_eq(vb))
            },
            _ => match (self.coerce_number(), other.coerce_number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Ordering as the `<>>`, `<<>`, `<>=>` and `<<=>` operators see it.
    ///
    /// Texts order lexicographically against texts; everything else orders
    /// through the same numeric coercion as [`Value::loose_eq`]. `None`
    /// means the values are unordered, which makes every ordering
    /// comparison false.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use arrow_lang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(3).loose_cmp(&Value::Float(2.5)), Some(Ordering::Greater));
    /// assert_eq!(Value::from("apple").loose_cmp(&Value::from("banana")), Some(Ordering::Less));
    /// assert_eq!(Value::from("abc").loose_cmp(&Value::Integer(1)), None);
    /// ```
    #[must_use]
    pub fn loose_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Null, _) | (_, Self::Null) => None,
            (Self::Array(_) | Self::Object(_), _) | (_, Self::Array(_) | Self::Object(_)) => None,
            _ => self.coerce_number()?.partial_cmp(&other.coerce_number()?),
        }
    }

    /// Writes the value as it appears inside an array or object, where text
    /// is quoted.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "\"{s}\""),
            _ => write!(f, "{self}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{}", format_float(*r)),
            Self::Text(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    value.fmt_nested(f)?;
                }

                write!(f, "]")
            },
            Self::Object(fields) => {
                if fields.is_empty() {
                    return write!(f, "{{}}");
                }

                write!(f, "{{ ")?;
                for (index, (key, value)) in fields.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: ")?;
                    value.fmt_nested(f)?;
                }
                write!(f, " }}")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn truthiness() {
        for falsy in [Value::Integer(0),
                      Value::Float(0.0),
                      Value::Float(f64::NAN),
                      Value::from(""),
                      Value::Bool(false),
                      Value::Null]
        {
            assert!(!falsy.is_truthy(), "{falsy:?} should be falsy");
        }
        for truthy in [Value::Integer(-1), Value::from("0"), Value::from(Vec::new())] {
            assert!(truthy.is_truthy(), "{truthy:?} should be truthy");
        }
    }

    #[test]
    fn display() {
        let object = Value::Object(Rc::new(vec![("volume".to_string(), Value::Integer(75)),
                                                ("theme".to_string(), Value::from("dark"))]));
        assert_eq!(object.to_string(), "{ volume: 75, theme: \"dark\" }");
        assert_eq!(Value::from(vec![Value::Float(2.5), Value::Null]).to_string(), "[2.5, null]");
        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(Value::Float(f64::INFINITY).to_string(), "Infinity");
    }

    #[test]
    fn unparseable_text_is_neither_equal_nor_ordered() {
        let text = Value::from("ten");
        let ten = Value::Integer(10);

        assert!(!text.loose_eq(&ten));
        assert_eq!(text.loose_cmp(&ten), None);
    }

    #[test]
    fn texts_compare_as_texts() {
        assert!(!Value::from("1.0").loose_eq(&Value::from("1")));
        assert_eq!(Value::from("10").loose_cmp(&Value::from("9")), Some(Ordering::Less));
    }

    #[test]
    fn arrays_compare_structurally() {
        let a = Value::from(vec![Value::Integer(1), Value::from("x")]);
        let b = Value::from(vec![Value::Float(1.0), Value::from("x")]);

        assert!(a.loose_eq(&b));
        assert_eq!(a.loose_cmp(&b), None);
    }
}
