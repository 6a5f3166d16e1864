//! Panel orchestration and layout management.
//!
//! Lays out header, options, chart and status panels and funnels their
//! interactions into a single result for the coordinator.

use std::path::PathBuf;
use hotplate::UiMode;
use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::presentation::color_mapping;
use crate::ui::{chart_panel, header, options_panel, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    ModeSelected(UiMode),
    PowerToggled,
    OpenRecordingRequested(PathBuf),
    SimulateRequested,
    SampleFeedRequested,
}

pub struct PanelManager;

impl PanelManager {
    /// Renders every panel in the window. Called from `eframe::App::update()`.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = color_mapping::theme_colors(
            state.theme.theme_manager(),
            state.theme.current_theme_name(),
        ).clone();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state, loader.is_loading()) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenRecordingRequested(path) => {
                        PanelInteraction::OpenRecordingRequested(path)
                    }
                    header::HeaderInteraction::SimulateRequested => PanelInteraction::SimulateRequested,
                    header::HeaderInteraction::SampleFeedRequested => PanelInteraction::SampleFeedRequested,
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, &theme_colors);
        });

        let options = egui::SidePanel::left("options_panel")
            .default_width(state.layout.options_width())
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Mode");
                options_panel::render_options_panel(ui, &mut state.panel, &theme_colors)
            });
        state.layout.set_options_width(options.response.rect.width());

        if let Some(options_interaction) = options.inner {
            interaction = Some(match options_interaction {
                options_panel::OptionsInteraction::ModeSelected(mode) => PanelInteraction::ModeSelected(mode),
                options_panel::OptionsInteraction::PowerToggled => PanelInteraction::PowerToggled,
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Temperature");
            ui.separator();
            chart_panel::render_chart_panel(ui, &state.panel, &theme_colors);
        });

        interaction
    }
}
