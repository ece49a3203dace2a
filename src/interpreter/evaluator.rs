/// Expression, term and exponent folding.
///
/// Implements the left-to-right folds for `+`/`-`, `*`/`/` and `^`.
pub mod binary;

/// Signed atoms and atoms.
///
/// Handles unary signs, literals, grouping and variable lookup.
pub mod unary;

/// Core evaluation logic and run management.
///
/// Contains the [`Evaluator`](core::Evaluator), statement evaluation, variable
/// name validation and diagnostic reporting.
pub mod core;

/// Function evaluation.
///
/// Handles builtin function calls, argument checking and the builtin catalog.
pub mod function;
