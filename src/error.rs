/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors are fatal: a program that fails to parse is never
/// evaluated.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the recoverable errors raised while evaluating a program, such as
/// undefined variables or calls with the wrong number of arguments. None of
/// them stop a run; the evaluator substitutes a sentinel value and continues.
pub mod eval_error;
/// Positioned diagnostics and the sinks that receive them.
pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticSink, StderrSink};
pub use eval_error::EvalError;
pub use parse_error::ParseError;
