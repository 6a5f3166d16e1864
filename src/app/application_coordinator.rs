//! Application-level coordination.
//!
//! Routes panel interactions into the [`PanelController`](hotplate::PanelController),
//! drives the chart feed timer from the frame loop and applies finished
//! recording loads.

use std::path::PathBuf;
use std::time::Instant;
use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};

pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Starts the chart feed. Called once, when the window opens.
    pub fn start_feed(state: &mut AppState) {
        state.panel.start(Instant::now());
    }

    /// Lets the feed fire if due and schedules the next repaint.
    ///
    /// Once the feed has stopped no repaint is scheduled, so an idle panel
    /// costs nothing.
    pub fn drive_feed(state: &mut AppState, ctx: &egui::Context) {
        let now = Instant::now();
        let wall_clock = chrono::Local::now();

        if let Some(point) = state.panel.tick(now, &wall_clock) {
            tracing::trace!(label = %point.label, value = point.value, "chart point appended");
        }

        if let Some(wait) = state.panel.time_until_next_point(now) {
            ctx.request_repaint_after(wait);
        }
    }

    /// Starts loading a recorded feed in the background.
    ///
    /// The current feed keeps running until the recording is ready.
    pub fn open_recording(state: &mut AppState, loader: &mut AsyncLoader, path: PathBuf, ctx: &egui::Context) {
        state.error_message = None;
        loader.start_file_load(path, ctx);
    }

    /// Swaps in a finished recording, or surfaces the load error.
    ///
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { source, path } => {
                tracing::info!(path = %path.display(), "recorded feed loaded");
                state.error_message = None;
                state.panel.replace_source(source, Instant::now());
                true
            }
            LoadResult::Error(error_msg) => {
                tracing::error!(error = %error_msg, "failed to load recorded feed");
                state.error_message = Some(format!("Error loading recording: {}", error_msg));
                true
            }
            LoadResult::None => false,
        }
    }

    /// Replaces the feed with the seeded simulator.
    pub fn start_simulation(state: &mut AppState) {
        state.error_message = None;
        state.panel.simulate(Instant::now());
    }

    /// Replays the built-in sample readings from the start.
    pub fn restart_sample_feed(state: &mut AppState) {
        state.error_message = None;
        state.panel.replace_source(hotplate::DynSource::default(), Instant::now());
    }
}
