//! Timed chart feed.
//!
//! Pulls one reading from a [`TemperatureSource`] per interval, labels it with
//! the wall-clock minute and second, and appends it to a [`ChartSeries`].
//!
//! The feed is driven from outside: the caller invokes [`ChartFeed::tick`] with
//! the current instant (every frame is fine) and the feed decides whether a
//! firing is due. Once the source runs dry the feed moves to
//! [`FeedState::Stopped`] and never fires again.

use std::time::{Duration, Instant};
use chrono::Timelike;
use crate::series::{ChartPoint, ChartSeries};
use crate::time_label::wall_clock_label;
use crate::traits::{DynSource, TemperatureSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    Running,
    Stopped,
}

pub struct ChartFeed {
    source: DynSource,
    state: FeedState,
    /// Readings emitted so far
    index: usize,
    interval: Duration,
    /// Instant of the next firing; `None` until the first tick anchors the timer
    next_due: Option<Instant>,
}

impl ChartFeed {
    pub fn new(source: DynSource, interval: Duration) -> Self {
        let mut feed = Self {
            source,
            state: FeedState::Running,
            index: 0,
            interval,
            next_due: None,
        };
        // An empty source never has anything to emit
        if feed.source.is_exhausted() {
            feed.state = FeedState::Stopped;
        }
        feed
    }

    /// Starts the timer at `now`; the first firing is one interval later.
    pub fn start_at(&mut self, now: Instant) {
        if self.state == FeedState::Running {
            self.next_due = Some(now + self.interval);
        }
    }

    pub fn state(&self) -> FeedState {
        self.state
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Instant at which the next firing is due, or `None` when stopped.
    pub fn next_due(&self) -> Option<Instant> {
        match self.state {
            FeedState::Running => self.next_due,
            FeedState::Stopped => None,
        }
    }

    /// Time left until the next firing, for scheduling a repaint.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due().map(|due| due.saturating_duration_since(now))
    }

    /// Advances the timer.
    ///
    /// Emits at most one point per call, even if several intervals have passed
    /// since the last one. Returns the point that was appended, if any.
    pub fn tick<T: Timelike>(&mut self, now: Instant, wall_clock: &T, series: &mut ChartSeries) -> Option<ChartPoint> {
        if self.state != FeedState::Running {
            return None;
        }

        let due = match self.next_due {
            Some(due) => due,
            None => {
                self.start_at(now);
                return None;
            }
        };
        if now < due {
            return None;
        }

        let Some(value) = self.source.next_value() else {
            self.stop();
            return None;
        };

        let point = ChartPoint {
            label: wall_clock_label(wall_clock),
            value,
        };
        series.push(point.clone());
        self.index += 1;

        // Late frames do not cause a burst of catch-up points
        let next = due + self.interval;
        self.next_due = Some(if next <= now { now + self.interval } else { next });

        if self.source.is_exhausted() {
            self.stop();
        }

        Some(point)
    }

    /// Cancels the timer. Terminal: a stopped feed never fires again.
    pub fn stop(&mut self) {
        if self.state == FeedState::Running {
            tracing::info!(points = self.index, source = self.source.name(), "chart feed stopped");
        }
        self.state = FeedState::Stopped;
        self.next_due = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use crate::sample_source::{SampleSource, SAMPLE_TEMPERATURES};

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 7).unwrap()
    }

    fn sample_feed() -> ChartFeed {
        ChartFeed::new(DynSource::Sample(SampleSource::default()), Duration::from_secs(1))
    }

    #[test]
    fn test_first_point_one_interval_after_start() {
        let mut feed = sample_feed();
        let mut series = ChartSeries::default();
        let t0 = Instant::now();
        feed.start_at(t0);

        assert!(feed.tick(t0, &noon(), &mut series).is_none());
        assert!(feed.tick(t0 + Duration::from_millis(999), &noon(), &mut series).is_none());
        let point = feed.tick(t0 + Duration::from_secs(1), &noon(), &mut series).unwrap();
        assert_eq!(point.value, 100.0);
        assert_eq!(point.label, "0:07");
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_unstarted_feed_anchors_on_first_tick() {
        let mut feed = sample_feed();
        let mut series = ChartSeries::default();
        let t0 = Instant::now();
        assert!(feed.tick(t0, &noon(), &mut series).is_none());
        assert_eq!(feed.next_due(), Some(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_stops_right_after_last_sample() {
        let mut feed = sample_feed();
        let mut series = ChartSeries::default();
        let t0 = Instant::now();
        feed.start_at(t0);

        for i in 1..=10 {
            feed.tick(t0 + Duration::from_secs(i), &noon(), &mut series);
        }
        assert_eq!(feed.state(), FeedState::Stopped);
        assert_eq!(feed.index(), 10);
        assert_eq!(feed.next_due(), None);
        assert_eq!(series.values().collect::<Vec<_>>(), SAMPLE_TEMPERATURES.to_vec());
    }

    #[test]
    fn test_late_frame_emits_single_point() {
        let mut feed = sample_feed();
        let mut series = ChartSeries::default();
        let t0 = Instant::now();
        feed.start_at(t0);

        let late = t0 + Duration::from_secs(5);
        assert!(feed.tick(late, &noon(), &mut series).is_some());
        assert!(feed.tick(late, &noon(), &mut series).is_none());
        assert_eq!(series.len(), 1);
        assert_eq!(feed.next_due(), Some(late + Duration::from_secs(1)));
    }

    #[test]
    fn test_empty_source_starts_stopped() {
        let feed = ChartFeed::new(DynSource::Sample(SampleSource::new(Vec::new())), Duration::from_secs(1));
        assert_eq!(feed.state(), FeedState::Stopped);
    }

    #[test]
    fn test_stop_is_terminal() {
        let mut feed = sample_feed();
        let mut series = ChartSeries::default();
        let t0 = Instant::now();
        feed.start_at(t0);
        feed.stop();
        feed.start_at(t0);
        assert!(feed.tick(t0 + Duration::from_secs(3), &noon(), &mut series).is_none());
        assert!(series.is_empty());
    }
}
