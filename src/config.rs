/// When the evaluator requires a `main` function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryPoint {
    /// Every program must declare a zero-parameter `main`.
    Always,
    /// A program that declares no functions is a plain script and runs
    /// without `main`; as soon as one function is declared, `main` is
    /// required.
    #[default]
    WhenFunctionsDeclared,
}

/// What an assignment to a name with no binding does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignmentMode {
    /// The assignment introduces a mutable binding.
    #[default]
    Declare,
    /// The assignment fails with an undefined-variable error.
    Reject,
}

/// Evaluation policy.
///
/// The default configuration runs short scripts such as
/// `result <== 10 <+> 5 <*> 2` as-is. [`Config::strict`] enforces the
/// declare-before-assign rule and a mandatory entry point.
///
/// # Example
/// ```
/// use arrow_lang::config::{AssignmentMode, Config, EntryPoint};
///
/// let strict = Config::strict();
/// assert_eq!(strict.entry_point, EntryPoint::Always);
/// assert_eq!(strict.assignment, AssignmentMode::Reject);
/// assert_ne!(strict, Config::default());
/// assert_eq!(strict.max_call_depth, Config::DEFAULT_MAX_CALL_DEPTH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// When `main` must be present.
    pub entry_point:    EntryPoint,
    /// How assignments to unbound names behave.
    pub assignment:     AssignmentMode,
    /// How many user-defined calls may be active at once. A call beyond
    /// this fails instead of exhausting the native stack.
    pub max_call_depth: usize,
}

impl Config {
    /// Call depth allowed unless configured otherwise.
    pub const DEFAULT_MAX_CALL_DEPTH: usize = 128;

    /// Requires `main` and rejects assignments to undeclared names.
    #[must_use]
    pub const fn strict() -> Self {
        Self { entry_point:    EntryPoint::Always,
               assignment:     AssignmentMode::Reject,
               max_call_depth: Self::DEFAULT_MAX_CALL_DEPTH, }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { entry_point:    EntryPoint::default(),
               assignment:     AssignmentMode::default(),
               max_call_depth: Self::DEFAULT_MAX_CALL_DEPTH, }
    }
}
