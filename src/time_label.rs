//! Minute:second label formatting for chart points and axis ticks.
//!
//! Seconds are zero-padded below 10, minutes never are: `3:05`, `12:45`.

use chrono::Timelike;

/// Formats a minute and second pair as `m:ss`.
///
/// # Examples
/// ```
/// use hotplate::format_minute_second;
/// assert_eq!(format_minute_second(3, 5), "3:05");
/// assert_eq!(format_minute_second(3, 45), "3:45");
/// ```
pub fn format_minute_second(minutes: u32, seconds: u32) -> String {
    format!("{}:{:02}", minutes, seconds)
}

/// Label for a chart point, taken from the wall-clock time at the moment the
/// point was produced. Hours are dropped.
pub fn wall_clock_label<T: Timelike>(time: &T) -> String {
    format_minute_second(time.minute(), time.second())
}

/// Formats an x-axis value in seconds as `m:ss`.
///
/// Negative values are clamped to zero.
///
/// # Examples
/// ```
/// use hotplate::format_axis_tick;
/// assert_eq!(format_axis_tick(0), "0:00");
/// assert_eq!(format_axis_tick(60), "1:00");
/// assert_eq!(format_axis_tick(600), "10:00");
/// ```
pub fn format_axis_tick(value_secs: i64) -> String {
    let value = value_secs.max(0) as u32;
    format_minute_second(value / 60, value % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use proptest::prelude::*;

    #[test]
    fn test_seconds_below_ten_are_padded() {
        assert_eq!(format_minute_second(7, 5), "7:05");
        assert_eq!(format_minute_second(0, 0), "0:00");
    }

    #[test]
    fn test_seconds_above_ten_are_not_padded() {
        assert_eq!(format_minute_second(7, 45), "7:45");
    }

    #[test]
    fn test_minutes_are_never_padded() {
        assert_eq!(format_minute_second(4, 10), "4:10");
        assert_eq!(format_minute_second(59, 59), "59:59");
    }

    #[test]
    fn test_wall_clock_label_drops_hours() {
        let time = NaiveTime::from_hms_opt(14, 3, 5).unwrap();
        assert_eq!(wall_clock_label(&time), "3:05");
        let time = NaiveTime::from_hms_opt(9, 22, 45).unwrap();
        assert_eq!(wall_clock_label(&time), "22:45");
    }

    #[test]
    fn test_axis_ticks_every_minute() {
        let labels: Vec<String> = (0..=600).step_by(60).map(format_axis_tick).collect();
        assert_eq!(labels.first().map(String::as_str), Some("0:00"));
        assert_eq!(labels[1], "1:00");
        assert_eq!(labels.last().map(String::as_str), Some("10:00"));
        assert_eq!(format_axis_tick(95), "1:35");
        assert_eq!(format_axis_tick(-5), "0:00");
    }

    proptest! {
        #[test]
        fn prop_seconds_always_two_digits(minutes in 0u32..60, seconds in 0u32..60) {
            let label = format_minute_second(minutes, seconds);
            let (m, s) = label.split_once(':').unwrap();
            prop_assert_eq!(s.len(), 2);
            prop_assert_eq!(m, minutes.to_string());
            prop_assert_eq!(s.parse::<u32>().unwrap(), seconds);
        }
    }
}
