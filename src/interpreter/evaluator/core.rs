use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef, Position, Program, Statement},
    config::{AssignmentMode, Config, EntryPoint},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::eval_binary,
            console::{Console, StdConsole},
            environment::Environment,
            unary::eval_unary,
            utils::check_type,
        },
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `->` ran; the enclosing function returns `value`.
    Return {
        /// The returned value.
        value:    Value,
        /// Location of the arrow.
        position: Position,
    },
}

/// Holds the state of one program run.
///
/// An evaluator owns the global [`Environment`], the table of declared
/// functions and the console the output built-ins write to. Nothing is
/// shared between evaluators; two runs of the same program on two
/// evaluators see independent state.
///
/// ## Usage
/// ```
/// use arrow_lang::{
///     config::Config,
///     interpreter::{
///         evaluator::{console::BufferConsole, core::Evaluator},
///         lexer::tokenize,
///         parser::core::parse,
///         value::core::Value,
///     },
/// };
///
/// let program = parse(&tokenize("x <== 2 <+> 3\nprint(x)").unwrap()).unwrap();
/// let mut evaluator = Evaluator::new(Config::default(), BufferConsole::new());
/// let environment = evaluator.evaluate(&program).unwrap();
///
/// assert_eq!(environment.value("x"), Some(&Value::Integer(5)));
/// assert_eq!(evaluator.console().output(), "5\n");
/// ```
#[derive(Debug)]
pub struct Evaluator<C: Console> {
    pub(crate) config:      Config,
    pub(crate) environment: Environment,
    pub(crate) functions:   HashMap<String, Rc<FunctionDef>>,
    pub(crate) console:     C,
    pub(crate) depth:       usize,
}

impl<C: Console> Evaluator<C> {
    /// Creates an evaluator with an empty environment and no declared
    /// functions.
    #[must_use]
    pub fn new(config: Config, console: C) -> Self {
        Self { config,
               environment: Environment::new(),
               functions: HashMap::new(),
               console,
               depth: 0 }
    }

    /// The current variable bindings.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The console the output built-ins write to.
    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Runs a program to completion.
    ///
    /// Top-level statements run in order. Afterwards the entry point is
    /// resolved according to [`Config::entry_point`] and, if present,
    /// `main` is called with no arguments.
    ///
    /// # Returns
    /// A snapshot of the environment after the run.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised. Bindings made before the
    /// failure stay in [`Evaluator::environment`].
    pub fn evaluate(&mut self, program: &Program) -> EvalResult<Environment> {
        log::debug!("evaluating {} top-level statements", program.body.len());

        for statement in &program.body {
            if let Flow::Return { position, .. } = self.eval_statement(statement)? {
                return Err(RuntimeError::ReturnOutsideFunction { position });
            }
        }

        self.run_entry_point()?;
        Ok(self.environment.clone())
    }

    /// Calls `main` or reports why it cannot be called.
    fn run_entry_point(&mut self) -> EvalResult<()> {
        let required = match self.config.entry_point {
            EntryPoint::Always => true,
            EntryPoint::WhenFunctionsDeclared => !self.functions.is_empty(),
        };

        match self.functions.get("main").cloned() {
            Some(main) if !main.params.is_empty() => {
                Err(RuntimeError::MissingEntryPoint { reason: format!("'main' must take no parameters, but declares {}",
                                                                      main.params.len()) })
            },
            Some(main) => {
                log::debug!("invoking entry point 'main'");
                self.call_function("main", Vec::new(), main.position)
                    .map(|_| ())
            },
            None if required => {
                Err(RuntimeError::MissingEntryPoint { reason: "no function named 'main' was declared".to_string() })
            },
            None => Ok(()),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands of binary operators are both evaluated, left first, before
    /// the operator applies; `<&&>` and `<||>` do not short-circuit.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` for unbound names, and whatever the
    /// operator, call or access raises.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, position } => {
                self.environment
                    .value(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name:     name.clone(),
                                                                     position: *position, })
            },
            Expr::Unary { op, operand, .. } => {
                let operand = self.eval(operand)?;
                Ok(eval_unary(*op, &operand))
            },
            Expr::Binary { left,
                           op,
                           right,
                           position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, &left, &right, *position)
            },
            Expr::Call { callee,
                         arguments,
                         position, } => {
                let args = arguments.iter()
                                    .map(|argument| self.eval(argument))
                                    .collect::<EvalResult<Vec<_>>>()?;
                self.call_function(callee, args, *position)
            },
            Expr::Array { elements, .. } => self.eval_array_literal(elements),
            Expr::Object { fields, .. } => self.eval_object_literal(fields),
            Expr::Index { target,
                          index,
                          position, } => self.eval_index(target, index, *position),
            Expr::Member { target,
                           property,
                           position, } => self.eval_member(target, property, *position),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Declarations bind or rebind a name, assignments overwrite one,
    /// function declarations register in the function table, and `->`
    /// produces [`Flow::Return`] for the enclosing call to pick up.
    ///
    /// # Errors
    /// - `TypeError` when a declared type is unknown or rejects the value.
    /// - `ConstReassignment` when a constant is declared or assigned again.
    /// - `UndefinedVariable` when strict assignment targets an unbound name.
    /// - `FunctionAlreadyDefined` and `BuiltinRedefinition` for bad
    ///   function names.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::VariableDeclaration { kind,
                                             name,
                                             declared_type,
                                             init,
                                             position, } => {
                let value = self.eval(init)?;
                if let Some(annotation) = declared_type {
                    check_type(annotation, &value, &format!("Variable '{name}'"), *position)?;
                }
                self.environment.declare(name, value, *kind, *position)?;
                Ok(Flow::Normal)
            },
            Statement::Assignment { name,
                                    value,
                                    position, } => {
                self.eval_assignment(name, value, *position)?;
                Ok(Flow::Normal)
            },
            Statement::Function(def) => {
                self.validate_function_name(&def.name, def.position)?;
                log::trace!("declared function '{}'", def.name);
                self.functions.insert(def.name.clone(), Rc::new(def.clone()));
                Ok(Flow::Normal)
            },
            Statement::Return { value, position } => {
                Ok(Flow::Return { value:    self.eval(value)?,
                                  position: *position, })
            },
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(Flow::Normal)
            },
            Statement::If { branches,
                            otherwise,
                            .. } => self.eval_if(branches, otherwise.as_deref()),
            Statement::While { condition, body, .. } => self.eval_while(condition, body),
            Statement::For { init,
                             condition,
                             update,
                             body,
                             .. } => self.eval_for(init, condition, update, body),
        }
    }

    /// Runs statements in order until one returns.
    pub(crate) fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            let flow = self.eval_statement(statement)?;
            if flow != Flow::Normal {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Writes to an existing binding, or handles an unbound name according
    /// to [`Config::assignment`].
    fn eval_assignment(&mut self, name: &str, value: &Expr, position: Position) -> EvalResult<()> {
        let bound = self.environment.get(name).is_some();
        if !bound && self.config.assignment == AssignmentMode::Reject {
            return Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                         position });
        }
        self.environment.ensure_writable(name, position)?;

        let value = self.eval(value)?;
        self.environment.assign(name, value, position)
    }
}

/// Evaluates a program with the default configuration, writing program
/// output to the standard streams.
///
/// # Errors
/// Returns the first `RuntimeError` raised by the program.
pub fn evaluate(program: &Program) -> EvalResult<Environment> {
    Evaluator::new(Config::default(), StdConsole).evaluate(program)
}
