//! Pure display derivations for health report fields.
//!
//! These are plain functions so the rendering layer stays free of arithmetic
//! and the rules stay testable in isolation.

/// Format a health score as a whole percentage with a trailing `%`.
///
/// Rounds to the nearest integer (`0.873` becomes `"87%"`, `0.875` becomes
/// `"88%"`). Scores outside `[0, 1]` are formatted as given, never rejected.
pub fn score_percent(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

/// Whole minutes of uptime, truncated (sub-minute precision is discarded).
pub fn uptime_minutes(uptime_seconds: f64) -> u64 {
    (uptime_seconds / 60.0).floor() as u64
}

/// Format an uptime in seconds as `"<n> minutes"`.
pub fn uptime_display(uptime_seconds: f64) -> String {
    format!("{} minutes", uptime_minutes(uptime_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_percent_midpoint() {
        assert_eq!(score_percent(0.5), "50%");
    }

    #[test]
    fn score_percent_rounds_not_truncates() {
        assert_eq!(score_percent(0.873), "87%");
        assert_eq!(score_percent(0.875), "88%");
        assert_eq!(score_percent(0.999), "100%");
    }

    #[test]
    fn score_percent_bounds() {
        assert_eq!(score_percent(0.0), "0%");
        assert_eq!(score_percent(1.0), "100%");
    }

    #[test]
    fn score_percent_out_of_range_does_not_fail() {
        assert_eq!(score_percent(1.5), "150%");
        assert_eq!(score_percent(-0.25), "-25%");
    }

    #[test]
    fn uptime_minutes_floors() {
        assert_eq!(uptime_minutes(125.0), 2);
        assert_eq!(uptime_minutes(119.9), 1);
        assert_eq!(uptime_minutes(59.0), 0);
        assert_eq!(uptime_minutes(0.0), 0);
    }

    #[test]
    fn uptime_display_unit() {
        assert_eq!(uptime_display(125.0), "2 minutes");
        assert_eq!(uptime_display(3600.0), "60 minutes");
    }
}
