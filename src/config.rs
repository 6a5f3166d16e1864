//! Panel configuration.
//!
//! Serializable so the GUI can keep it in eframe storage between runs. Missing
//! fields fall back to their defaults, so older stored blobs still load.
//! Stored values are only trusted after [`PanelConfig::validated`].

use std::time::Duration;
use serde::{Deserialize, Serialize};

/// Widest x domain the chart will draw, seconds (one day)
const MAX_X_SPAN_SECS: i64 = 86_400;
/// Most x ticks an axis may produce
const MAX_X_TICKS: i64 = 1_000;
/// Widest y range, °C
const MAX_Y_SPAN: f64 = 2_000.0;
/// Longest feed cadence, milliseconds (one hour)
const MAX_SAMPLE_INTERVAL_MS: u64 = 3_600_000;

/// Chart axis ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// X domain start, seconds
    pub x_min: i64,
    /// X domain end, seconds (10 minutes)
    pub x_max: i64,
    /// Distance between x ticks, seconds
    pub x_step: i64,
    /// Y range, °C
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            x_min: 0,
            x_max: 600,
            x_step: 60,
            y_min: 20.0,
            y_max: 260.0,
        }
    }
}

impl AxisConfig {
    /// True when both ranges are ordered, finite and small enough to draw.
    pub fn is_valid(&self) -> bool {
        let Some(x_span) = self.x_max.checked_sub(self.x_min) else {
            return false;
        };
        let y_span = self.y_max - self.y_min;

        self.x_step > 0
            && x_span > 0
            && x_span <= MAX_X_SPAN_SECS
            && x_span / self.x_step <= MAX_X_TICKS
            && self.y_min.is_finite()
            && self.y_max.is_finite()
            && y_span > 0.0
            && y_span <= MAX_Y_SPAN
    }

    /// X tick positions from `x_min` to `x_max` inclusive.
    pub fn x_ticks(&self) -> Vec<i64> {
        if self.x_step <= 0 || self.x_max < self.x_min {
            return vec![self.x_min];
        }
        (self.x_min..=self.x_max).step_by(self.x_step as usize).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Feed cadence in milliseconds
    pub sample_interval_ms: u64,
    pub axis: AxisConfig,
    /// Seed for the simulated source
    pub simulator_seed: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 1000,
            axis: AxisConfig::default(),
            simulator_seed: 42,
        }
    }
}

impl PanelConfig {
    /// Feed cadence; never shorter than one millisecond.
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms.max(1))
    }

    /// Replaces out-of-range settings with their defaults.
    ///
    /// Used on configuration restored from storage, which may be stale or
    /// hand-edited.
    pub fn validated(mut self) -> Self {
        if !self.axis.is_valid() {
            tracing::warn!(axis = ?self.axis, "stored axis configuration rejected, using defaults");
            self.axis = AxisConfig::default();
        }
        if !(1..=MAX_SAMPLE_INTERVAL_MS).contains(&self.sample_interval_ms) {
            tracing::warn!(
                sample_interval_ms = self.sample_interval_ms,
                "stored sample interval rejected, using default"
            );
            self.sample_interval_ms = PanelConfig::default().sample_interval_ms;
        }
        self
    }
}
