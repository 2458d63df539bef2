/// Format a result for display.
///
/// Integral values are written without a fractional part, other values with
/// at most 8 decimals and no trailing zeros. The output is always a valid
/// expression evaluating back to (approximately) `value`.
///
/// # Examples
///
/// ```
/// # use rpncalc::format_result;
/// assert_eq!(format_result(14.0), "14");
/// assert_eq!(format_result(0.125), "0.125");
/// assert_eq!(format_result(1.0 / 3.0), "0.33333333");
/// ```
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value);
    }
    let formatted = format!("{:.8}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        return "0".into();
    }
    trimmed.into()
}

#[cfg(test)]
mod tests {
    use super::format_result;
    use test_case::test_case;

    #[test_case(0.0 => "0" ; "zero")]
    #[test_case(-2.0 => "-2" ; "negative integer")]
    #[test_case(1e20 => "100000000000000000000" ; "large integer")]
    #[test_case(0.5 => "0.5" ; "half")]
    #[test_case(-1.25 => "-1.25" ; "negative decimal")]
    #[test_case(std::f64::consts::PI => "3.14159265" ; "rounded to eight decimals")]
    #[test_case(1e-9 => "0" ; "tiny positive")]
    #[test_case(-1e-9 => "0" ; "tiny negative")]
    fn format(value: f64) -> String {
        format_result(value)
    }
}
