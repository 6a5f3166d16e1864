//! Chart coordinate mapping.
//!
//! Pure functions for placing readings inside the chart rectangle:
//! - Seconds on the x-axis to screen X
//! - Temperatures on the y-axis to screen Y
//! - Sample index to elapsed seconds
//!
//! Values outside the configured range are clamped to the chart edge.

use hotplate::AxisConfig;

/// Converts elapsed seconds to an X coordinate within `rect`.
pub fn secs_to_x(secs: f64, axis: &AxisConfig, rect: egui::Rect) -> f32 {
    let span = match axis.x_max.checked_sub(axis.x_min) {
        Some(span) if span > 0 => span as f64,
        _ => return rect.left(),
    };
    let normalized = ((secs - axis.x_min as f64) / span).clamp(0.0, 1.0);
    rect.left() + normalized as f32 * rect.width()
}

/// Converts a temperature to a Y coordinate within `rect` (higher is up).
pub fn temp_to_y(temp: f64, axis: &AxisConfig, rect: egui::Rect) -> f32 {
    let span = axis.y_max - axis.y_min;
    if span <= 0.0 {
        return rect.bottom();
    }
    let normalized = ((temp - axis.y_min) / span).clamp(0.0, 1.0);
    rect.bottom() - normalized as f32 * rect.height()
}

/// Elapsed seconds at which the `index`-th reading is plotted.
pub fn sample_secs(index: usize, interval: std::time::Duration) -> f64 {
    index as f64 * interval.as_secs_f64()
}

/// How many of the first `count` readings fall on or before `x_max`.
///
/// Readings past the right edge are not drawn.
pub fn visible_point_count(count: usize, interval: std::time::Duration, axis: &AxisConfig) -> usize {
    (0..count)
        .take_while(|&i| sample_secs(i, interval) <= axis.x_max as f64)
        .count()
}

/// Y-axis gridline temperatures, every `step` degrees from `y_min`.
pub fn y_ticks(axis: &AxisConfig, step: f64) -> Vec<f64> {
    if step <= 0.0 || axis.y_max < axis.y_min {
        return vec![axis.y_min];
    }
    let count = ((axis.y_max - axis.y_min) / step).floor() as usize;
    (0..=count).map(|i| axis.y_min + i as f64 * step).collect()
}
