use crate::{
    ast::{Position, Program, Statement},
    error::{Diagnostic, DiagnosticSink, EvalError},
    interpreter::environment::Environment,
};

/// Result type used by builtin dispatch.
///
/// Fallible evaluation steps return either a value of type `T` or the
/// [`EvalError`] describing the failure. The evaluator turns every error into
/// a diagnostic and NaN.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the runtime evaluation state.
///
/// An `Evaluator` owns the [`Environment`] of one run and the sink that
/// receives its diagnostics. Nothing else can reach the environment while the
/// run is in progress.
///
/// ## Usage
///
/// Create one evaluator per run and call [`Evaluator::run`], or drive it one
/// statement at a time with [`Evaluator::eval_statement`].
///
/// ```
/// use formulon::{
///     error::Diagnostic,
///     interpreter::{evaluator::core::Evaluator, parser::core::parse},
/// };
///
/// let program = parse("x = 2 + 3 * 4; y = z + 1;").unwrap();
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let env = Evaluator::new(&mut diagnostics).run(&program);
///
/// assert_eq!(env.get("x"), Some(14.0));
/// assert!(env.get("y").is_some_and(f64::is_nan));
/// assert_eq!(diagnostics[0].to_string(), "line 1:19 Undefined variable: z");
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let mut evaluator = Evaluator::new(&mut diagnostics);
/// for statement in &program.statements {
///     evaluator.eval_statement(statement);
/// }
/// assert_eq!(evaluator.environment().len(), 2);
///
/// let env = evaluator.into_environment();
/// assert_eq!(env.get("x"), Some(14.0));
/// assert_eq!(diagnostics.len(), 1);
/// ```
pub struct Evaluator<S: DiagnosticSink> {
    environment: Environment,
    sink:        S,
}

impl<S: DiagnosticSink> Evaluator<S> {
    /// Creates an evaluator with an empty environment.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self { environment: Environment::new(),
               sink }
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Ends the run and hands back its environment.
    #[must_use]
    pub fn into_environment(self) -> Environment {
        self.environment
    }

    /// Evaluates every statement of `program` in order and returns the final
    /// environment.
    ///
    /// Recoverable errors never stop the run: each one is reported and the
    /// affected statement stores its sentinel value.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn run(mut self, program: &Program) -> Environment {
        for statement in &program.statements {
            self.eval_statement(statement);
        }
        self.environment
    }

    /// Evaluates a single statement and stores its value.
    ///
    /// The value is the expression's result, or `0` when the statement has no
    /// expression. An invalid variable name is reported and stores NaN; the
    /// expression is still evaluated so that its own errors surface.
    ///
    /// # Returns
    /// The value that was stored.
    pub fn eval_statement(&mut self, statement: &Statement) -> f64 {
        let variable = &statement.variable;
        let valid = is_valid_variable_name(&variable.name);
        if !valid {
            self.report(variable.position,
                        EvalError::InvalidVariableName { name: variable.name.clone() });
        }

        let value = statement.expression
                             .as_ref()
                             .map_or(0.0, |expression| self.evaluate(expression));
        let value = if valid { value } else { f64::NAN };

        self.environment.assign(&variable.name, value);
        tracing::debug!(name = %variable.name, value, "assigned variable");

        value
    }

    /// Sends a diagnostic for `error` at `position` to the sink.
    pub(crate) fn report(&mut self, position: Position, error: EvalError) {
        let diagnostic = Diagnostic::new(position, error);
        tracing::debug!(%diagnostic, "recoverable evaluation error");
        self.sink.report(diagnostic);
    }
}

/// Checks that `name` may be used as a variable.
///
/// A variable name must start with an ASCII letter or an underscore.
///
/// # Example
/// ```
/// use formulon::interpreter::evaluator::core::is_valid_variable_name;
///
/// assert!(is_valid_variable_name("_tmp1"));
/// assert!(is_valid_variable_name("Rate"));
/// assert!(!is_valid_variable_name("9lives"));
/// assert!(!is_valid_variable_name(""));
/// ```
#[must_use]
pub fn is_valid_variable_name(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
}
