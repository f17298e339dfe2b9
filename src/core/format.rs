//! Display formatting for conversion results

/// Render a result with exactly two decimal digits
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞".to_string() } else { "-∞".to_string() };
    }
    // Avoid "-0.00" for tiny negative results
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0.00".to_string();
    }
    format!("{:.2}", value)
}

/// One-line summary, e.g. "100 celsius = 212.00 fahrenheit".
/// The input value is echoed as typed.
pub fn format_conversion(value: f64, from_unit: &str, result: f64, to_unit: &str) -> String {
    format!("{} {} = {} {}", value, from_unit, format_result(result), to_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals() {
        assert_eq!(format_result(212.0), "212.00");
        assert_eq!(format_result(1.609344), "1.61");
        assert_eq!(format_result(0.004), "0.00");
        assert_eq!(format_result(-0.001), "0.00");
        assert_eq!(format_result(-40.0), "-40.00");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_result(f64::NAN), "NaN");
        assert_eq!(format_result(f64::INFINITY), "∞");
        assert_eq!(format_result(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            format_conversion(100.0, "celsius", 212.0, "fahrenheit"),
            "100 celsius = 212.00 fahrenheit"
        );
        assert_eq!(
            format_conversion(2.5, "mile", 4.02336, "kilometer"),
            "2.5 mile = 4.02 kilometer"
        );
    }
}
