//! Formatting helpers for axis ticks and tooltip lines.

/// Metric values print without a trailing `.0` but keep one decimal when
/// the source data carries one (camera resolutions like 12.2 MP).
pub fn format_metric(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Axis ticks print as whole numbers (years, counts, rounded metrics).
pub fn format_tick(value: f64) -> String {
    format!("{value:.0}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_values_drop_the_decimal() {
        assert_eq!(format_metric(3000.0), "3000");
        assert_eq!(format_metric(8.0), "8");
    }

    #[test]
    fn fractional_values_keep_one_decimal() {
        assert_eq!(format_metric(12.2), "12.2");
    }

    #[test]
    fn non_finite_values_render_as_a_dash() {
        assert_eq!(format_metric(f64::NAN), "—");
    }

    #[test]
    fn ticks_are_whole_numbers() {
        assert_eq!(format_tick(2016.0), "2016");
        assert_eq!(format_tick(2000.0), "2000");
    }
}
