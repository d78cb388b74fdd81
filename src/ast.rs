use std::fmt;

/// A 1-based location in the source text.
///
/// Columns count characters, not bytes, so that a diagnostic points at the
/// glyph a reader sees in their editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code. Composite literals (arrays and objects) have their own
/// expression variants because their elements are expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A double-quoted string literal, quotes removed.
    Text(String),
    /// `true` or `false`.
    Bool(bool),
    /// `null`.
    Null,
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Every operator lexeme the lexer recognises.
///
/// Bracketed and plain spellings (`<+>` and `+`) map to the same variant; the
/// original spelling survives in the token text. Not every operator is valid
/// in every position: `Assign`, `TypeOpen` and `TypeClose` are statement
/// punctuation, `Not` is prefix only.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// `<==`
    Assign,
    /// `<:`
    TypeOpen,
    /// `:>`
    TypeClose,
    /// `<+>` or `+`
    Add,
    /// `<->` or `-`
    Sub,
    /// `<*>` or `*`
    Mul,
    /// `</>` or `/`
    Div,
    /// `<&&>` or `&&`
    And,
    /// `<||>` or `||`
    Or,
    /// `<!!>` or `!!`
    Not,
    /// `<=>` or `==`
    Equal,
    /// `<!=>` or `!=`
    NotEqual,
    /// `<>>` or `>`
    Greater,
    /// `<<>` or `<`
    Less,
    /// `<>=>` or `>=`
    GreaterEqual,
    /// `<<=>` or `<=`
    LessEqual,
}

impl Operator {
    /// Returns `true` for operators that may join two operands.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        !matches!(self, Self::Assign | Self::TypeOpen | Self::TypeClose | Self::Not)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lexeme = match self {
            Self::Assign => "<==",
            Self::TypeOpen => "<:",
            Self::TypeClose => ":>",
            Self::Add => "<+>",
            Self::Sub => "<->",
            Self::Mul => "<*>",
            Self::Div => "</>",
            Self::And => "<&&>",
            Self::Or => "<||>",
            Self::Not => "<!!>",
            Self::Equal => "<=>",
            Self::NotEqual => "<!=>",
            Self::Greater => "<>>",
            Self::Less => "<<>",
            Self::GreaterEqual => "<>=>",
            Self::LessEqual => "<<=>",
        };
        write!(f, "{lexeme}")
    }
}

/// Prefix operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical negation (`<!!>`).
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => write!(f, "<!!>"),
        }
    }
}

/// Whether a binding may be written after it is declared.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mutability {
    /// Declared with `<const>` or a `const` type annotation.
    Const,
    /// Declared with `<var>`, a plain type annotation, or introduced by
    /// assignment.
    Var,
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const => write!(f, "const"),
            Self::Var => write!(f, "var"),
        }
    }
}

/// A type written in the source, such as the `int` in `<const int>` or in
/// `age <: int :>`.
///
/// The name is kept verbatim; resolving it to a known tag is the evaluator's
/// job, so an unknown name only fails when the declaration actually runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAnnotation {
    /// The base type name, `const` stripped.
    pub name:     String,
    /// `true` when the annotation carried a `const` modifier.
    pub constant: bool,
    /// Where the annotation was written.
    pub position: Position,
}

/// An abstract syntax tree node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or null).
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Source location.
        position: Position,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Source location.
        position: Position,
    },
    /// A prefix operation.
    Unary {
        /// The operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Source location of the operator.
        position: Position,
    },
    /// A binary operation. The operator is one for which
    /// [`Operator::is_binary`] holds.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       Operator,
        /// Right operand.
        right:    Box<Self>,
        /// Source location of the operator.
        position: Position,
    },
    /// Function call expression (e.g. `greet("you")`).
    Call {
        /// Name of the function being called.
        callee:    String,
        /// Arguments to the function, in order.
        arguments: Vec<Self>,
        /// Source location of the callee name.
        position:  Position,
    },
    /// Array literal expression (`[1, 2, 3]`).
    Array {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Source location of the opening bracket.
        position: Position,
    },
    /// Object literal expression (`{ volume: 75 }`).
    Object {
        /// Key/value pairs in source order.
        fields:   Vec<(String, Self)>,
        /// Source location of the opening brace.
        position: Position,
    },
    /// Indexing expression (`items[0]`).
    Index {
        /// The value being indexed.
        target:   Box<Self>,
        /// The index expression.
        index:    Box<Self>,
        /// Source location of the opening bracket.
        position: Position,
    },
    /// Property access (`settings.theme`, `items.length`).
    Member {
        /// The value whose property is read.
        target:   Box<Self>,
        /// The property name.
        property: String,
        /// Source location of the property name.
        position: Position,
    },
}

impl Expr {
    /// Gets the source position of `self`.
    /// ## Example
    /// ```
    /// use arrow_lang::ast::{Expr, Position};
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: Position::new(5, 3), };
    ///
    /// assert_eq!(expr.position(), Position::new(5, 3));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { position, .. }
            | Self::Variable { position, .. }
            | Self::Unary { position, .. }
            | Self::Binary { position, .. }
            | Self::Call { position, .. }
            | Self::Array { position, .. }
            | Self::Object { position, .. }
            | Self::Index { position, .. }
            | Self::Member { position, .. } => *position,
        }
    }
}

/// A single function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Parameter name.
    pub name:          String,
    /// Declared type, if any.
    pub declared_type: Option<TypeAnnotation>,
    /// Whether the body may reassign the parameter.
    pub mutability:    Mutability,
    /// Source location of the name.
    pub position:      Position,
}

/// A user-defined function declaration.
///
/// Declarations are not closures: the body sees the global environment at
/// call time plus the parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:        String,
    /// Parameters in positional order.
    pub params:      Vec<Parameter>,
    /// Declared return type. `None` accepts any value.
    pub return_type: Option<TypeAnnotation>,
    /// Statements making up the body.
    pub body:        Vec<Statement>,
    /// Source location of the function marker.
    pub position:    Position,
}

/// One `if`/`elif` arm: a condition and the statements it guards.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// Condition tested for truthiness.
    pub condition: Expr,
    /// Statements run when the condition holds.
    pub body:      Vec<Statement>,
}

/// A statement. The body of a [`Program`] and of every block is a sequence of
/// these.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `<const int> x <== 5` or `x <: int :> <== 5`.
    VariableDeclaration {
        /// Mutability of the new binding.
        kind:          Mutability,
        /// The name of the variable.
        name:          String,
        /// The declared type, if any.
        declared_type: Option<TypeAnnotation>,
        /// The initial value.
        init:          Expr,
        /// Source location.
        position:      Position,
    },
    /// `x <== expr`.
    Assignment {
        /// The name of the variable.
        name:     String,
        /// The value which is being assigned.
        value:    Expr,
        /// Source location.
        position: Position,
    },
    /// `<bool fn> name(params) { body }`.
    Function(FunctionDef),
    /// `-> expr`.
    Return {
        /// The returned value.
        value:    Expr,
        /// Source location of the arrow.
        position: Position,
    },
    /// A call evaluated for its side effects, e.g. `print(x)`.
    Expression {
        /// The expression to evaluate.
        expr:     Expr,
        /// Source location.
        position: Position,
    },
    /// `if -> c { } elif -> c { } else { }`.
    If {
        /// The `if` arm followed by each `elif` arm, in order.
        branches:  Vec<Branch>,
        /// The `else` body, if present.
        otherwise: Option<Vec<Self>>,
        /// Source location of `if`.
        position:  Position,
    },
    /// `while -> c { }`.
    While {
        /// Condition re-tested before every iteration.
        condition: Expr,
        /// Loop body.
        body:      Vec<Self>,
        /// Source location of `while`.
        position:  Position,
    },
    /// `for -> init ; condition ; update { }`.
    For {
        /// Runs once before the first test.
        init:      Box<Self>,
        /// Tested before every iteration.
        condition: Expr,
        /// Runs after every iteration.
        update:    Box<Self>,
        /// Loop body.
        body:      Vec<Self>,
        /// Source location of `for`.
        position:  Position,
    },
}

impl Statement {
    /// Gets the source position of `self`.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Function(def) => def.position,
            Self::VariableDeclaration { position, .. }
            | Self::Assignment { position, .. }
            | Self::Return { position, .. }
            | Self::Expression { position, .. }
            | Self::If { position, .. }
            | Self::While { position, .. }
            | Self::For { position, .. } => *position,
        }
    }
}

/// The root of the tree: every top-level statement in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements.
    pub body: Vec<Statement>,
}
