//! Header panel UI rendering
//!
//! Top bar with the feed source controls and theme selector.

use eframe::egui;
use std::path::PathBuf;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a recording file to play back
    OpenRecordingRequested(PathBuf),
    /// User asked for the simulated plate
    SimulateRequested,
    /// User asked to replay the built-in sample readings
    SampleFeedRequested,
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `loading` - Whether a recording is currently being loaded
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState, loading: bool) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading("PCB Hot Plate");
        ui.separator();

        ui.label("Feed:");
        if ui.button("▶ Sample").clicked() {
            interaction = Some(HeaderInteraction::SampleFeedRequested);
        }

        if ui.button("🔮 Simulate").clicked() {
            interaction = Some(HeaderInteraction::SimulateRequested);
        }

        let open = ui.add_enabled(!loading, egui::Button::new("📁 Load Recording"));
        if open.clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Recordings", &["json", "br"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenRecordingRequested(path));
            }
        }
        if loading {
            ui.spinner();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(ui.visuals().error_fg_color, err);
    }

    interaction
}
