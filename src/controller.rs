//! The panel model.
//!
//! `PanelController` owns every piece of state the control panel has: the mode
//! switch, the profile grid, the power button, the chart feed and the series
//! it draws into. The GUI only reads it and forwards button presses.

use std::time::{Duration, Instant};
use chrono::Timelike;
use crate::config::PanelConfig;
use crate::feed::{ChartFeed, FeedState};
use crate::mode::{ModeSwitch, UiMode};
use crate::power::{PowerButton, PowerState};
use crate::profile::ProfileGrid;
use crate::series::{ChartPoint, ChartSeries};
use crate::simulated_source::SimulatedSource;
use crate::traits::DynSource;

pub struct PanelController {
    config: PanelConfig,
    mode: ModeSwitch,
    profile: ProfileGrid,
    power: PowerButton,
    feed: ChartFeed,
    series: ChartSeries,
}

impl PanelController {
    /// Creates a panel fed by the built-in sample readings.
    pub fn new(config: PanelConfig) -> Self {
        Self::with_source(config, DynSource::default())
    }

    pub fn with_source(config: PanelConfig, source: DynSource) -> Self {
        let feed = ChartFeed::new(source, config.sample_interval());
        Self {
            config,
            mode: ModeSwitch::new(),
            profile: ProfileGrid::new(),
            power: PowerButton::new(),
            feed,
            series: ChartSeries::default(),
        }
    }

    // ===== Mode Switch =====

    /// Shows the reflow options, hides the heat options and rebuilds the
    /// profile grid from scratch.
    pub fn select_reflow(&mut self) {
        self.mode.select(UiMode::Reflow);
        self.profile.regenerate();
        tracing::debug!("reflow mode selected, profile grid regenerated");
    }

    /// Shows the heat options and hides the reflow options. The profile grid
    /// is left alone.
    pub fn select_heat(&mut self) {
        self.mode.select(UiMode::Heat);
        tracing::debug!("heat mode selected");
    }

    pub fn mode(&self) -> &ModeSwitch {
        &self.mode
    }

    // ===== Profile Grid =====

    pub fn profile(&self) -> &ProfileGrid {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProfileGrid {
        &mut self.profile
    }

    // ===== Power =====

    pub fn toggle_power(&mut self) -> PowerState {
        let state = self.power.toggle();
        tracing::debug!(label = self.power.label(), "power button toggled");
        state
    }

    pub fn power(&self) -> &PowerButton {
        &self.power
    }

    // ===== Chart Feed =====

    /// Arms the feed timer; the first point is due one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.feed.start_at(now);
        tracing::info!(
            source = self.feed.source_name(),
            interval_ms = self.feed.interval().as_millis() as u64,
            "chart feed started"
        );
    }

    /// Lets the feed fire if it is due. Returns the point that was appended.
    pub fn tick<T: Timelike>(&mut self, now: Instant, wall_clock: &T) -> Option<ChartPoint> {
        self.feed.tick(now, wall_clock, &mut self.series)
    }

    /// How long until the next point, or `None` once the feed has stopped.
    pub fn time_until_next_point(&self, now: Instant) -> Option<Duration> {
        self.feed.time_until_due(now)
    }

    /// Starts a fresh feed session on a different source.
    ///
    /// The series is cleared and the new feed starts running at index 0.
    pub fn replace_source(&mut self, source: DynSource, now: Instant) {
        self.feed.stop();
        self.series.clear();
        self.feed = ChartFeed::new(source, self.config.sample_interval());
        tracing::info!(source = self.feed.source_name(), "temperature source replaced");
        self.start(now);
    }

    /// Switches to the seeded simulator.
    pub fn simulate(&mut self, now: Instant) {
        let source = SimulatedSource::new(self.config.simulator_seed);
        self.replace_source(DynSource::Simulated(source), now);
    }

    pub fn feed(&self) -> &ChartFeed {
        &self.feed
    }

    pub fn feed_state(&self) -> FeedState {
        self.feed.state()
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Cancels the feed timer. Called when the window closes.
    pub fn shutdown(&mut self) {
        self.feed.stop();
    }
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use crate::sample_source::SampleSource;

    fn wall() -> NaiveTime {
        NaiveTime::from_hms_opt(8, 15, 30).unwrap()
    }

    #[test]
    fn test_heat_does_not_touch_profile() {
        let mut panel = PanelController::default();
        panel.select_reflow();
        panel.profile_mut().points_mut()[0].set_point = "150".to_string();

        panel.select_heat();
        assert_eq!(panel.profile().points()[0].set_point, "150");
        assert!(panel.mode().heat_options_visible());
    }

    #[test]
    fn test_replace_source_restarts_session() {
        let mut panel = PanelController::default();
        let t0 = Instant::now();
        panel.start(t0);
        panel.tick(t0 + Duration::from_secs(1), &wall());
        assert_eq!(panel.series().len(), 1);

        let t1 = t0 + Duration::from_secs(2);
        panel.replace_source(DynSource::Sample(SampleSource::new(vec![30.0, 31.0])), t1);
        assert!(panel.series().is_empty());
        assert_eq!(panel.feed().index(), 0);
        assert_eq!(panel.feed_state(), FeedState::Running);

        panel.tick(t1 + Duration::from_secs(1), &wall());
        panel.tick(t1 + Duration::from_secs(2), &wall());
        assert_eq!(panel.series().values().collect::<Vec<_>>(), vec![30.0, 31.0]);
        assert_eq!(panel.feed_state(), FeedState::Stopped);
    }

    #[test]
    fn test_simulate_switches_source() {
        let mut panel = PanelController::default();
        panel.simulate(Instant::now());
        assert_eq!(panel.feed().source_name(), "Simulated");
        assert_eq!(panel.feed_state(), FeedState::Running);
    }

    #[test]
    fn test_shutdown_cancels_timer() {
        let mut panel = PanelController::default();
        let t0 = Instant::now();
        panel.start(t0);
        panel.shutdown();
        assert_eq!(panel.time_until_next_point(t0), None);
        assert!(panel.tick(t0 + Duration::from_secs(1), &wall()).is_none());
    }
}
