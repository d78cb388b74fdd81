/// Numeric conversion helpers.
///
/// Conversions between `i64`, `usize` and `f64` that the evaluator needs for
/// mixed arithmetic, indexing and lengths, plus the textual number parsing
/// and float rendering shared by comparisons and `Display`.
pub mod num;
