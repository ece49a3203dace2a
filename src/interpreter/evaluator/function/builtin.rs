/// Defines a single-argument builtin backed by the `f64` method of the given
/// name.
///
/// The generated functions expect exactly one argument; any other count
/// yields NaN. Dispatch checks arity before calling, so that case only
/// arises when a builtin is called directly.
///
/// # Example
/// ```
/// use formulon::interpreter::evaluator::function::builtin::{cos, ln};
///
/// assert_eq!(cos(&[0.0]), 1.0);
/// assert_eq!(ln(&[1.0]), 0.0);
/// assert!(cos(&[]).is_nan());
/// ```
macro_rules! unary_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[f64]) -> f64 {
            match args {
                [x] => x.$real_fn(),
                _ => f64::NAN,
            }
        }
    };
}

unary_builtin!(sin, sin);
unary_builtin!(asin, asin);
unary_builtin!(cos, cos);
unary_builtin!(acos, acos);
unary_builtin!(tan, tan);
unary_builtin!(atan, atan);
unary_builtin!(ln, ln);

/// Raises `args[0]` to the power `args[1]`.
///
/// Domain errors follow IEEE-754, e.g. `pow(-8, 1/3)` is NaN.
///
/// # Example
/// ```
/// use formulon::interpreter::evaluator::function::builtin::pow;
///
/// assert_eq!(pow(&[2.0, 10.0]), 1024.0);
/// assert!(pow(&[2.0]).is_nan());
/// ```
#[must_use]
pub fn pow(args: &[f64]) -> f64 {
    match args {
        [base, exponent] => base.powf(*exponent),
        _ => f64::NAN,
    }
}
