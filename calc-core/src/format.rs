/// Render a result the way the calculator prints it.
///
/// Whole numbers are printed without a decimal point and everything else
/// keeps its fractional part. Negative zero prints as `0`.
///
/// Uses Rust's shortest round-trip `Display`: NaN prints as `NaN`, and whole
/// numbers past 2^53 print their shortest digits padded with zeros rather
/// than the exact binary integer.
#[must_use]
pub fn format_result(value: f64) -> String {
  if value.is_finite() && value.fract() == 0.0 {
    // -0.0 + 0.0 == +0.0
    return format!("{}", value + 0.0);
  }
  format!("{value}")
}
