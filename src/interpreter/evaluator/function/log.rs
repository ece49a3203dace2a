/// Computes the logarithm of a value with respect to a given base.
///
/// Accepts exactly two arguments: `value` and `base`, and returns
/// `ln(value) / ln(base)`. A base of `1` divides by zero and yields an
/// infinity or NaN, like any other IEEE-754 fault.
///
/// # Example
/// ```
/// use formulon::interpreter::evaluator::function::log::log;
///
/// assert!((log(&[1000.0, 10.0]) - 3.0).abs() < 1e-12);
/// assert!(log(&[8.0, 1.0]).is_infinite());
/// assert!(log(&[8.0]).is_nan());
/// ```
#[must_use]
pub fn log(args: &[f64]) -> f64 {
    match args {
        [value, base] => value.ln() / base.ln(),
        _ => f64::NAN,
    }
}
