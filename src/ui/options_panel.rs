//! Options panel UI rendering
//!
//! Left side of the window: the Reflow/Heat mode buttons, the options area for
//! the selected mode, and the power button.

use eframe::egui;
use egui::{Color32, RichText};
use hotplate::{PanelController, ThemeColors, UiMode};
use crate::presentation::color_mapping;

/// Result of user interaction with the options panel
pub enum OptionsInteraction {
    ModeSelected(UiMode),
    PowerToggled,
}

/// Renders the options panel
///
/// Profile text is edited in place; everything else is reported back so the
/// coordinator applies it to the controller.
pub fn render_options_panel(
    ui: &mut egui::Ui,
    panel: &mut PanelController,
    colors: &ThemeColors,
) -> Option<OptionsInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        for mode in [UiMode::Reflow, UiMode::Heat] {
            if mode_button(ui, mode, panel.mode().is_active(mode), colors).clicked() {
                interaction = Some(OptionsInteraction::ModeSelected(mode));
            }
        }
    });

    ui.separator();

    if panel.mode().mode_options_visible() {
        if panel.mode().reflow_options_visible() {
            render_reflow_options(ui, panel);
        }
        if panel.mode().heat_options_visible() {
            render_heat_options(ui);
        }
        ui.separator();
    }

    let power = panel.power();
    let power_button = egui::Button::new(RichText::new(power.label()).color(Color32::WHITE).strong())
        .fill(color_mapping::power_button_fill(power.style(), colors))
        .min_size(egui::vec2(80.0, 28.0));
    if ui.add(power_button).clicked() {
        interaction = Some(OptionsInteraction::PowerToggled);
    }

    interaction
}

fn mode_button(ui: &mut egui::Ui, mode: UiMode, active: bool, colors: &ThemeColors) -> egui::Response {
    let mut button = egui::Button::new(mode.label()).min_size(egui::vec2(90.0, 28.0));
    if let Some(fill) = color_mapping::mode_button_fill(active, colors) {
        button = button.fill(fill);
    }
    ui.add(button)
}

fn render_reflow_options(ui: &mut egui::Ui, panel: &mut PanelController) {
    ui.label(RichText::new("Reflow Profile").strong());

    egui::ScrollArea::vertical()
        .id_salt("profile_points")
        .max_height(360.0)
        .show(ui, |ui| {
            egui::Grid::new("profile_points_grid")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    for point in panel.profile_mut().points_mut() {
                        let set_point_hint = point.set_point_placeholder();
                        let time_hint = point.time_placeholder();
                        ui.add(
                            egui::TextEdit::singleline(&mut point.set_point)
                                .hint_text(set_point_hint)
                                .desired_width(110.0),
                        );
                        ui.add(
                            egui::TextEdit::singleline(&mut point.time)
                                .hint_text(time_hint)
                                .desired_width(110.0),
                        );
                        ui.end_row();
                    }
                });
        });
}

fn render_heat_options(ui: &mut egui::Ui) {
    ui.label(RichText::new("Heat").strong());
    ui.label("Constant heating of the plate.");
}
