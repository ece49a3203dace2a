/// Single-argument builtins and `pow`.
///
/// Thin wrappers over the `f64` methods of the same meaning.
pub mod builtin;
/// The two-argument `log` builtin.
///
/// Computes the logarithm of a value in an arbitrary base.
pub mod log;

/// Builtin table and call dispatch.
pub mod core;
