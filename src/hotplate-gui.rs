//! Hot-plate control panel GUI
//!
//! Desktop front end for a PCB reflow hot plate, built on egui:
//! - Reflow/Heat mode selection with a ten-point reflow profile grid
//! - Power button
//! - Live temperature chart fed once per second from a replaceable source
//!   (built-in samples, a simulator, or a recording loaded from disk)
//!
//! Layout:
//! - `app/` - Application state and coordinators
//! - `state/` - GUI-only state (theme, layout)
//! - `domain/` - Chart coordinate mapping
//! - `presentation/` - Color mapping for panel widgets
//! - `io/` - Background loading of recordings
//! - `utils/` - Formatting helpers
//! - `ui/` - Panel rendering
//! - `rendering/` - Chart axis and series drawing

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod utils;
mod domain;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use hotplate::PanelConfig;
use io::AsyncLoader;
use state::LayoutState;
use ui::panel_manager::{PanelInteraction, PanelManager};

const PANEL_CONFIG_KEY: &str = "panel_config";
const LAYOUT_KEY: &str = "layout";

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    // Optional recording to play instead of the sample readings
    let initial_recording = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_title("PCB Hot Plate"),
        ..Default::default()
    };

    eframe::run_native(
        "PCB Hot Plate",
        options,
        Box::new(move |cc| Ok(Box::new(HotPlateApp::new(cc, initial_recording)))),
    )
}

struct HotPlateApp {
    state: AppState,
    loader: AsyncLoader,
    /// Recording requested on the command line, loaded on the first frame
    pending_recording: Option<PathBuf>,
}

impl HotPlateApp {
    /// Restores theme, layout and panel configuration from storage, then
    /// starts the chart feed.
    fn new(cc: &eframe::CreationContext, initial_recording: Option<PathBuf>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let config: PanelConfig =
            SettingsCoordinator::load_setting_or(cc.storage, PANEL_CONFIG_KEY, PanelConfig::default())
                .validated();
        let layout: LayoutState =
            SettingsCoordinator::load_setting_or(cc.storage, LAYOUT_KEY, LayoutState::default());

        let mut state = AppState::new(config, theme_name, layout);
        ApplicationCoordinator::start_feed(&mut state);

        Self {
            state,
            loader: AsyncLoader::new(),
            pending_recording: initial_recording,
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::ModeSelected(hotplate::UiMode::Reflow) => self.state.panel.select_reflow(),
            PanelInteraction::ModeSelected(hotplate::UiMode::Heat) => self.state.panel.select_heat(),
            PanelInteraction::PowerToggled => {
                self.state.panel.toggle_power();
            }
            PanelInteraction::OpenRecordingRequested(path) => {
                ApplicationCoordinator::open_recording(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::SimulateRequested => ApplicationCoordinator::start_simulation(&mut self.state),
            PanelInteraction::SampleFeedRequested => ApplicationCoordinator::restart_sample_feed(&mut self.state),
        }
    }
}

impl Drop for HotPlateApp {
    fn drop(&mut self) {
        self.state.panel.shutdown();
    }
}

impl eframe::App for HotPlateApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, PANEL_CONFIG_KEY, self.state.panel.config());
        SettingsCoordinator::save_setting(storage, LAYOUT_KEY, &self.state.layout);
    }

    /// Per frame:
    /// 1. Apply a finished recording load, if any
    /// 2. Apply the theme
    /// 3. Kick off the command-line recording on the first frame
    /// 4. Let the chart feed fire and schedule the next repaint
    /// 5. Render panels and handle what the operator clicked
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(path) = self.pending_recording.take() {
            ApplicationCoordinator::open_recording(&mut self.state, &mut self.loader, path, ctx);
        }

        ApplicationCoordinator::drive_feed(&mut self.state, ctx);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
