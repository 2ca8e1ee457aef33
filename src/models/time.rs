use chrono::{Duration, NaiveTime};

/// Default time-of-day pattern: zero-padded 12-hour clock with AM/PM
/// suffix and no seconds, e.g. `09:00AM`, `01:30PM`.
pub const DEFAULT_TIME_PATTERN: &str = "%I:%M%p";

/// Build a clock time from hour and minute.
///
/// Out-of-range components fall back to midnight rather than panicking;
/// all call sites in this crate pass fixed in-range values.
pub fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Whole minutes from `from` to `to` (positive when `to` is later).
pub fn minutes_between(from: NaiveTime, to: NaiveTime) -> i64 {
    (to - from).num_minutes()
}

/// Advance a clock time by a number of minutes.
pub fn add_minutes(time: NaiveTime, minutes: i64) -> NaiveTime {
    time + Duration::minutes(minutes)
}

/// Time-of-day formatter configured once at process start and applied to
/// every emitted `starts_at`/`ends_at` value.
#[derive(Debug, Clone)]
pub struct TimeFormatter {
    pattern: String,
}

impl TimeFormatter {
    /// Create a formatter with an explicit strftime pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Raw pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render a clock time with the configured pattern.
    pub fn format(&self, time: NaiveTime) -> String {
        time.format(&self.pattern).to_string()
    }
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_PATTERN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_components() {
        let t = clock(9, 30);
        assert_eq!(t, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn test_clock_out_of_range_falls_back_to_midnight() {
        assert_eq!(clock(25, 0), NaiveTime::default());
    }

    #[test]
    fn test_minutes_between() {
        assert_eq!(minutes_between(clock(16, 20), clock(17, 0)), 40);
        assert_eq!(minutes_between(clock(9, 0), clock(12, 0)), 180);
        assert_eq!(minutes_between(clock(13, 0), clock(13, 0)), 0);
    }

    #[test]
    fn test_add_minutes() {
        assert_eq!(add_minutes(clock(9, 0), 90), clock(10, 30));
        assert_eq!(add_minutes(clock(13, 0), 200), clock(16, 20));
    }

    #[test]
    fn test_default_pattern_rendering() {
        let fmt = TimeFormatter::default();
        assert_eq!(fmt.format(clock(9, 0)), "09:00AM");
        assert_eq!(fmt.format(clock(12, 0)), "12:00PM");
        assert_eq!(fmt.format(clock(13, 0)), "01:00PM");
        assert_eq!(fmt.format(clock(17, 0)), "05:00PM");
    }

    #[test]
    fn test_custom_pattern() {
        let fmt = TimeFormatter::new("%H:%M");
        assert_eq!(fmt.format(clock(13, 5)), "13:05");
        assert_eq!(fmt.pattern(), "%H:%M");
    }
}
