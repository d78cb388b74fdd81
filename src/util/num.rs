/// Widens an `i64` to `f64` for mixed integer/float arithmetic.
///
/// Integers beyond `2^53` in magnitude round to the nearest representable
/// float, the same as integer overflow promotion does.
///
/// ## Example
/// ```
/// use arrow_lang::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Resolves a script index against a collection of `length` elements.
///
/// ## Returns
/// - `Some(usize)`: If `0 <= index < length`.
/// - `None`: If the index is negative or past the end.
///
/// ## Example
/// ```
/// use arrow_lang::util::num::index_to_usize;
///
/// assert_eq!(index_to_usize(2, 3), Some(2));
/// assert_eq!(index_to_usize(3, 3), None);
/// assert_eq!(index_to_usize(-1, 3), None);
/// ```
#[must_use]
pub fn index_to_usize(index: i64, length: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < length)
}

/// Converts a collection length to a script integer, saturating at
/// `i64::MAX`.
#[must_use]
pub fn usize_to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Parses text as a number for comparisons against numeric values.
///
/// Surrounding whitespace is ignored. Anything Rust's `f64` parser rejects,
/// including the empty string, is not a number.
///
/// ## Example
/// ```
/// use arrow_lang::util::num::parse_number;
///
/// assert_eq!(parse_number(" 25 "), Some(25.0));
/// assert_eq!(parse_number("2.5"), Some(2.5));
/// assert_eq!(parse_number("abc"), None);
/// assert_eq!(parse_number(""), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Renders a float the way scripts see it.
///
/// Finite values use Rust's shortest round-trip form, so `3.0` renders as
/// `3` and `2.5` as `2.5`. Infinities render as `Infinity` and `-Infinity`.
///
/// ## Example
/// ```
/// use arrow_lang::util::num::format_float;
///
/// assert_eq!(format_float(2.5), "2.5");
/// assert_eq!(format_float(3.0), "3");
/// assert_eq!(format_float(f64::NEG_INFINITY), "-Infinity");
/// assert_eq!(format_float(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_infinite() {
        if value.is_sign_positive() { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else {
        format!("{value}")
    }
}
