use std::{
    collections::{BTreeMap, btree_map},
    fmt,
};

use crate::{
    ast::{Mutability, Position},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A variable's current value and whether it may be written again.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The bound value.
    pub value:      Value,
    /// `Const` bindings reject every later write.
    pub mutability: Mutability,
}

/// The flat, program-wide variable table.
///
/// There is no block scoping: a name declared inside an `if` body or a loop
/// stays bound afterwards. Function calls run against a copy, so writes
/// inside a call are discarded when it returns.
///
/// Names iterate and display in sorted order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: BTreeMap<String, Binding>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a binding by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name).map(|binding| &binding.value)
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over bindings in name order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.bindings.iter() }
    }

    /// Binds `name` as a declaration does.
    ///
    /// Redeclaring a mutable name replaces it, with the new mutability.
    ///
    /// # Errors
    /// Returns `ConstReassignment` if `name` is already bound as a constant.
    pub fn declare(&mut self,
                   name: &str,
                   value: Value,
                   mutability: Mutability,
                   position: Position)
                   -> EvalResult<()> {
        self.ensure_writable(name, position)?;
        self.overlay(name, value, mutability);
        Ok(())
    }

    /// Overwrites `name` as an assignment does. The binding becomes, or
    /// stays, mutable.
    ///
    /// # Errors
    /// Returns `ConstReassignment` if `name` is bound as a constant.
    ///
    /// # Example
    /// ```
    /// use arrow_lang::{
    ///     ast::{Mutability, Position},
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::environment::Environment, value::core::Value},
    /// };
    ///
    /// let mut env = Environment::new();
    /// let at = Position::new(1, 1);
    /// env.declare("limit", Value::Integer(5), Mutability::Const, at).unwrap();
    ///
    /// let err = env.assign("limit", Value::Integer(6), at).unwrap_err();
    /// assert!(matches!(err, RuntimeError::ConstReassignment { .. }));
    /// assert_eq!(env.value("limit"), Some(&Value::Integer(5)));
    /// ```
    pub fn assign(&mut self, name: &str, value: Value, position: Position) -> EvalResult<()> {
        self.declare(name, value, Mutability::Var, position)
    }

    /// Fails if a write to `name` would violate a constant binding.
    ///
    /// # Errors
    /// Returns `ConstReassignment` if `name` is bound as a constant.
    pub fn ensure_writable(&self, name: &str, position: Position) -> EvalResult<()> {
        match self.bindings.get(name) {
            Some(Binding { mutability: Mutability::Const,
                           .. }) => Err(RuntimeError::ConstReassignment { name: name.to_string(),
                                                                          position }),
            _ => Ok(()),
        }
    }

    /// Binds `name` unconditionally, shadowing any existing binding.
    /// Used for parameters, which live in a per-call copy.
    pub(crate) fn overlay(&mut self, name: &str, value: Value, mutability: Mutability) {
        self.bindings
            .insert(name.to_string(), Binding { value, mutability });
    }
}

/// Iterator over an [`Environment`]'s bindings in name order.
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Binding>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Binding);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, binding)| (name.as_str(), binding))
    }
}

impl<'a> IntoIterator for &'a Environment {
    type IntoIter = Iter<'a>;
    type Item = (&'a str, &'a Binding);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, binding)) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "<{}> {name} = {}", binding.mutability, binding.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    const AT: Position = Position::new(1, 1);

    #[test]
    fn constants_never_change() {
        let mut env = Environment::new();
        env.declare("age", Value::Integer(25), Mutability::Const, AT).unwrap();

        assert!(env.declare("age", Value::Integer(26), Mutability::Var, AT).is_err());
        assert!(env.assign("age", Value::Integer(27), AT).is_err());
        assert_eq!(env.value("age"), Some(&Value::Integer(25)));
    }

    #[test]
    fn assignment_downgrades_to_var() {
        let mut env = Environment::new();
        env.declare("x", Value::Integer(1), Mutability::Var, AT).unwrap();
        env.assign("x", Value::from("one"), AT).unwrap();

        let binding = env.get("x").unwrap();
        assert_eq!(binding.mutability, Mutability::Var);
        assert_eq!(binding.value, Value::from("one"));
    }

    #[test]
    fn display_is_sorted() {
        let mut env = Environment::new();
        env.declare("zeta", Value::Bool(true), Mutability::Var, AT).unwrap();
        env.declare("alpha", Value::Integer(1), Mutability::Const, AT).unwrap();

        assert_eq!(env.to_string(), "<const> alpha = 1\n<var> zeta = true");
        assert_eq!(env.iter().map(|(name, _)| name).collect::<Vec<_>>(), ["alpha", "zeta"]);
    }
}
