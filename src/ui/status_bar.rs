//! Status bar UI rendering
//!
//! Bottom line with feed state, source, point count and memory usage.

use eframe::egui;
use egui::RichText;
use hotplate::{FeedState, ThemeColors};
use crate::app::AppState;
use crate::domain::chart_operations;
use crate::utils::{format_memory_mb, format_temperature, get_current_memory_mb};

pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) {
    let panel = &state.panel;

    ui.horizontal(|ui| {
        ui.label(RichText::new(format_memory_mb(get_current_memory_mb())).strong());
        ui.label(RichText::new("|").strong());

        let (feed_text, feed_color) = match panel.feed_state() {
            FeedState::Running => ("Feed: Running", colors.success),
            FeedState::Stopped => ("Feed: Stopped", colors.text_dim),
        };
        ui.label(RichText::new(feed_text).strong().color(feed_color));

        ui.label(RichText::new(format!(
            "| Source: {} | Points: {}",
            panel.feed().source_name(),
            panel.series().len()
        )).strong());

        let total = panel.series().len();
        let hidden = total - chart_operations::visible_point_count(total, panel.feed().interval(), &panel.config().axis);
        if hidden > 0 {
            ui.label(RichText::new(format!("| Past chart edge: {}", hidden)).strong().color(colors.text_dim));
        }

        if let Some(last) = panel.series().last() {
            ui.label(RichText::new(format!("| Last: {}", format_temperature(last.value))).strong());
        }

        if let Some(mode) = panel.mode().selected() {
            ui.label(RichText::new(format!("| Mode: {}", mode.label())).strong());
        }
    });
}
