use thiserror::Error;

/// Represents the recoverable errors that can occur during evaluation.
///
/// An `EvalError` never aborts a run. The evaluator reports it as a
/// [`Diagnostic`](crate::error::Diagnostic) and continues with NaN in place of
/// the value that could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Read a variable that no earlier statement assigned.
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Assigned to a name that does not start with a letter or underscore.
    #[error("Invalid variable name: {name}. Variable names must start with a letter or underscore.")]
    InvalidVariableName {
        /// The rejected name.
        name: String,
    },
    /// Called a function outside the builtin catalog.
    #[error("Unknown function: {name}")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Called a function with an empty argument list.
    #[error("Missing arguments in call to function {name}")]
    MissingArguments {
        /// The name of the function.
        name: String,
    },
    /// The argument list ended with a comma.
    #[error("Trailing commas are not allowed in function calls: {name}")]
    TrailingComma {
        /// The name of the function.
        name: String,
    },
    /// Supplied the wrong number of arguments to a builtin.
    #[error("Invalid number of arguments for function {name}: expected {expected}, found {found}")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The arity of the builtin.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// A numeric literal whose text is not a valid `f64`.
    #[error("Invalid numeric literal: {text}")]
    InvalidNumber {
        /// The literal text.
        text: String,
    },
}
