/// Decimal places computed results are rounded to unless configured
/// otherwise.
pub const DEFAULT_PRECISION: i32 = 10;

/// Rounds `value` to `places` decimal places.
///
/// Non-finite values are returned unchanged, as are values so large that
/// scaling them would overflow; those have no fractional digits to round
/// anyway. A precision so far from zero that `10^places` is not a normal
/// float leaves the value unchanged as well.
///
/// ## Parameters
/// - `value`: The value to round.
/// - `places`: Decimal places to keep; negative counts round to tens,
///   hundreds and so on.
///
/// ## Returns
/// The nearest multiple of `10^-places`, halves rounding away from zero.
///
/// ## Example
/// ```
/// use reckon::util::num::round_to;
///
/// assert_eq!(round_to(0.1 + 0.2, 10), 0.3);
/// assert_eq!(round_to(2.0 * std::f64::consts::PI, 10), 6.2831853072);
/// assert!(round_to(f64::NAN, 10).is_nan());
/// ```
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places);
    if !factor.is_normal() {
        return value;
    }
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Renders a value as the decimal text returned to callers.
///
/// Integral values print without a fractional part, negative zero prints as
/// `0` and non-finite values print as `NaN`, `Infinity` or `-Infinity`.
///
/// ## Parameters
/// - `value`: The value to render.
///
/// ## Returns
/// The shortest decimal text that reads back as `value`.
///
/// ## Example
/// ```
/// use reckon::util::num::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(6.2831853072), "6.2831853072");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_respects_places() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(-1.235_000_1, 2), -1.24);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn rounding_leaves_huge_values_alone() {
        assert_eq!(round_to(1e300, 10), 1e300);
        assert_eq!(round_to(f64::INFINITY, 10), f64::INFINITY);
    }

    #[test]
    fn extreme_precision_leaves_values_alone() {
        assert_eq!(round_to(1.5, -400), 1.5);
        assert_eq!(round_to(1.5, 400), 1.5);
        assert_eq!(round_to(1234.0, -2), 1200.0);
    }

    #[test]
    fn formatting_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
    }

    #[test]
    fn formatting_fractions() {
        assert_eq!(format_number(0.3), "0.3");
        assert_eq!(format_number(-2.5), "-2.5");
    }
}
