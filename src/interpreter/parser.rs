/// Parser entry points and the shared result type.
///
/// Holds [`parse`](core::parse), which turns source text into a
/// [`Program`](crate::ast::Program), and the program-level rule.
pub mod core;

/// Additive, multiplicative and exponent chains.
///
/// Each level collects its operands into the flat chain node the evaluator
/// folds, rather than building nested binary nodes.
pub mod binary;

/// Signed atoms, atoms and function calls.
pub mod unary;

/// Helper routines shared by the parsing functions.
pub mod utils;

/// Statement parsing: `name = expression` and bare `name`.
pub mod statement;
