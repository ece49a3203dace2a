/// Output formatting for values and environments.
///
/// This module renders `f64` values the way C's `%g` conversion does, with a
/// configurable number of significant digits, and prints a whole environment
/// as `name=value` lines.
///
/// # Responsibilities
/// - Choose between fixed and scientific notation per value.
/// - Strip trailing zeros so `14.000000` prints as `14`.
/// - Render NaN, infinities and negative zero consistently.
pub mod format;
