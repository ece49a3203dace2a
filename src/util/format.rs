use crate::interpreter::environment::Environment;

/// Significant digits used when none are requested.
pub const DEFAULT_PRECISION: usize = 8;

/// Formats `value` with `precision` significant digits.
///
/// Fixed notation is used when the decimal exponent lies in
/// `-4..precision`, scientific notation otherwise. Trailing zeros are
/// removed in both. A precision of `0` is treated as `1`.
///
/// ## Example
/// ```
/// use formulon::util::format::format_value;
///
/// assert_eq!(format_value(14.0, 8), "14");
/// assert_eq!(format_value(std::f64::consts::PI, 8), "3.1415927");
/// assert_eq!(format_value(0.0001, 8), "0.0001");
/// assert_eq!(format_value(0.00001, 8), "1e-05");
/// assert_eq!(format_value(123_456_789.0, 8), "1.2345679e+08");
/// assert_eq!(format_value(f64::NAN, 8), "nan");
/// ```
#[must_use]
pub fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    // Exponent after rounding to `precision` digits, so 99999999.5 moves up a decade.
    let exponent = exponent.parse::<i64>().unwrap_or(0);
    let limit = i64::try_from(precision).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Removes trailing zeros after a decimal point, and the point itself if
/// nothing is left behind it.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Renders an environment as `name=value` lines in name order.
///
/// Every line, including the last, ends with `\n`.
///
/// ## Example
/// ```
/// use formulon::{
///     interpreter::environment::Environment,
///     util::format::{DEFAULT_PRECISION, render},
/// };
///
/// let mut env = Environment::new();
/// env.assign("y", 0.5);
/// env.assign("x", 14.0);
///
/// assert_eq!(render(&env, DEFAULT_PRECISION), "x=14\ny=0.5\n");
/// ```
#[must_use]
pub fn render(environment: &Environment, precision: usize) -> String {
    environment.iter()
               .map(|(name, value)| format!("{name}={}\n", format_value(value, precision)))
               .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fixed_notation_trims_zeros() {
        assert_eq!(format_value(64.0, 8), "64");
        assert_eq!(format_value(8.5, 8), "8.5");
        assert_eq!(format_value(-2.25, 8), "-2.25");
        assert_eq!(format_value(0.1 + 0.2, 8), "0.3");
        assert_eq!(format_value(1234.5678, 8), "1234.5678");
    }

    #[test]
    fn scientific_notation_past_precision() {
        assert_eq!(format_value(1e20, 8), "1e+20");
        assert_eq!(format_value(-2.5e-7, 8), "-2.5e-07");
        assert_eq!(format_value(12_345_678.0, 8), "12345678");
        assert_eq!(format_value(99_999_999.5, 8), "1e+08");
        assert_eq!(format_value(1.5e300, 8), "1.5e+300");
    }

    #[test]
    fn special_values() {
        assert_eq!(format_value(f64::INFINITY, 8), "inf");
        assert_eq!(format_value(f64::NEG_INFINITY, 8), "-inf");
        assert_eq!(format_value(-0.0, 8), "-0");
        assert_eq!(format_value(0.0, 8), "0");
    }

    #[test]
    fn precision_is_configurable() {
        assert_eq!(format_value(std::f64::consts::E, 3), "2.72");
        assert_eq!(format_value(std::f64::consts::E, 0), "3");
        assert_eq!(format_value(1.0 / 3.0, 15), "0.333333333333333");
    }
}
