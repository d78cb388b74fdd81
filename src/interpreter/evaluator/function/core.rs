use std::fmt;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            console::Console,
            core::{EvalResult, Evaluator, Flow},
            function::{builtin, io},
            utils::check_type,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the console, a slice of evaluated argument values and
/// the position of the call.
type BuiltinFn = fn(&mut dyn Console, &[Value], Position) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `Any` accepts every count, including zero.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    Any,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names that user functions may not take.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print"  => { arity: Arity::Any, func: io::print },
    "output" => { arity: Arity::Any, func: io::output },
    "input"  => { arity: Arity::OneOf(&[0, 1]), func: io::input },
    "len"    => { arity: Arity::Exact(1), func: |_, args, position| builtin::len(args, position) },
    "str"    => { arity: Arity::Exact(1), func: |_, args, _| Ok(builtin::str(args)) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::OneOf(counts) => counts.contains(&n),
            Self::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(counts) => {
                let counts = counts.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{}", counts.join(" or "))
            },
            Self::Any => write!(f, "any number of"),
        }
    }
}

impl<C: Console> Evaluator<C> {
    /// Evaluates a function call with already evaluated arguments.
    ///
    /// The evaluator first checks whether the name matches a builtin.
    /// If so, it verifies arity and executes the builtin.
    /// Otherwise it delegates to user-defined function handling.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated argument values, in order.
    /// - `position`: Location of the call.
    ///
    /// # Errors
    /// `ArgumentCountMismatch`, `UndefinedFunction`, and anything the
    /// function itself raises.
    pub(crate) fn call_function(&mut self,
                                name: &str,
                                args: Vec<Value>,
                                position: Position)
                                -> EvalResult<Value> {
        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            if !builtin.arity.check(args.len()) {
                return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                 expected: builtin.arity
                                                                                  .to_string(),
                                                                 found: args.len(),
                                                                 position });
            }
            return (builtin.func)(&mut self.console, &args, position);
        }

        self.call_user_defined_function(name, args, position)
    }

    /// Executes a user-defined function.
    ///
    /// The body runs against a copy of the current environment with each
    /// parameter bound to its argument. The caller's environment is restored
    /// afterwards, whether the call succeeds or fails, so writes made inside
    /// the call do not leak out.
    ///
    /// # Errors
    /// - `UndefinedFunction` for an unknown name.
    /// - `ArgumentCountMismatch` when the argument count differs from the
    ///   parameter count.
    /// - `TypeError` when an argument or the returned value does not match
    ///   its declared type.
    fn call_user_defined_function(&mut self,
                                  name: &str,
                                  args: Vec<Value>,
                                  position: Position)
                                  -> EvalResult<Value> {
        let func = self.functions
                       .get(name)
                       .cloned()
                       .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string(),
                                                                        position })?;

        if args.len() != func.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: func.params
                                                                           .len()
                                                                           .to_string(),
                                                             found: args.len(),
                                                             position });
        }

        let mut frame = self.environment.clone();
        for (param, arg) in func.params.iter().zip(args) {
            if let Some(annotation) = &param.declared_type {
                check_type(annotation,
                           &arg,
                           &format!("Parameter '{}' of '{name}'", param.name),
                           position)?;
            }
            frame.overlay(&param.name, arg, param.mutability);
        }

        if self.depth >= self.config.max_call_depth {
            return Err(RuntimeError::StackOverflow { name: name.to_string(),
                                                     limit: self.config.max_call_depth,
                                                     position });
        }

        log::debug!("calling '{name}' at {position}");
        let caller = std::mem::replace(&mut self.environment, frame);
        self.depth += 1;
        let flow = self.eval_block(&func.body);
        self.depth -= 1;
        self.environment = caller;

        let value = match flow? {
            Flow::Return { value, .. } => value,
            Flow::Normal => Value::Null,
        };

        if let Some(annotation) = &func.return_type {
            check_type(annotation, &value, &format!("Function '{name}'"), position)?;
        }
        Ok(value)
    }

    /// Ensures that a user-defined function name is valid.
    ///
    /// A function name is rejected if:
    /// - a function with the same name already exists, or
    /// - the name belongs to a builtin.
    pub(crate) fn validate_function_name(&self, name: &str, position: Position) -> EvalResult<()> {
        if self.functions.contains_key(name) {
            return Err(RuntimeError::FunctionAlreadyDefined { name: name.to_string(),
                                                              position });
        }
        if BUILTIN_FUNCTIONS.contains(&name) {
            return Err(RuntimeError::BuiltinRedefinition { name: name.to_string(),
                                                           position });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::{
        config::Config,
        interpreter::{evaluator::console::BufferConsole, lexer::tokenize, parser::core::parse},
    };

    fn run(source: &str) -> (EvalResult<()>, String) {
        let program = parse(&tokenize(source).unwrap()).unwrap();
        let mut evaluator = Evaluator::new(Config::default(), BufferConsole::new());
        let result = evaluator.evaluate(&program).map(|_| ());
        (result, evaluator.console().output().to_string())
    }

    #[test]
    fn arity_descriptions() {
        assert_eq!(Arity::Exact(1).to_string(), "1");
        assert_eq!(Arity::OneOf(&[0, 1]).to_string(), "0 or 1");
    }

    #[test]
    fn writes_inside_a_call_do_not_leak() {
        let (result, output) = run("
            counter <== 1
            <fn> bump() { counter <== counter + 1 print(counter) }
            <fn> main() { bump() bump() print(counter) }
        ");
        result.unwrap();
        assert_eq!(output, "2\n2\n1\n");
    }

    #[test]
    fn recursion_returns_through_blocks() {
        let (result, output) = run("
            <int fn> fact(<int> n) {
                if -> n <= 1 { -> 1 }
                -> n * fact(n - 1)
            }
            <fn> main() { print(fact(10)) }
        ");
        result.unwrap();
        assert_eq!(output, "3628800\n");
    }

    #[test]
    fn argument_count_is_checked() {
        let (result, _) = run("<fn> greet(name) { print(name) }\n<fn> main() { greet() }");
        assert!(matches!(result,
                         Err(RuntimeError::ArgumentCountMismatch { found: 0, ref expected, .. })
                         if expected == "1"));
    }

    #[test]
    fn declared_return_type_is_enforced() {
        let (result, _) = run("<bool fn> check() { -> 1 }\n<fn> main() { check() }");
        let err = result.unwrap_err();
        assert_eq!(err.to_string(),
                   "Type error at line 2, column 15: Function 'check' expects bool, found int");
    }

    #[test]
    fn runaway_recursion_is_an_error() {
        let (result, _) = run("
            <int fn> down(<int> n) {
                if -> n <=> 0 { -> 0 }
                -> down(n <-> 1)
            }
            <fn> main() { print(down(100000)) }
        ");
        assert!(matches!(result,
                         Err(RuntimeError::StackOverflow { ref name, limit, .. })
                         if name == "down" && limit == Config::DEFAULT_MAX_CALL_DEPTH));
    }

    #[test]
    fn depth_limit_counts_active_calls_only() {
        let program = parse(&tokenize("
            <int fn> down(<int> n) {
                if -> n <=> 0 { -> 0 }
                -> down(n <-> 1)
            }
            <fn> main() { print(down(8), down(8)) }
        ").unwrap()).unwrap();
        let config = Config { max_call_depth: 10,
                              ..Config::default() };
        let mut evaluator = Evaluator::new(config, BufferConsole::new());

        evaluator.evaluate(&program).unwrap();
        assert_eq!(evaluator.console().output(), "0 0\n");
    }

    #[test]
    fn builtins_cannot_be_redefined() {
        let (result, _) = run("<fn> print(x) { }");
        assert!(matches!(result, Err(RuntimeError::BuiltinRedefinition { .. })));
    }

    #[test]
    fn functions_cannot_be_declared_twice() {
        let (result, _) = run("<fn> main() { }\n<fn> main() { }");
        assert!(matches!(result,
                         Err(RuntimeError::FunctionAlreadyDefined { position, .. })
                         if position.line == 2));
    }
}
