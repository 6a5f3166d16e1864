//! Chart panel UI rendering
//!
//! Central area: the "Current Temperature" line chart.

use eframe::egui;
use hotplate::{PanelController, ThemeColors};
use crate::rendering::{axis_renderer, chart_renderer};
use crate::utils::format_temperature;

/// Room left around the plot for tick labels
const LEFT_MARGIN: f32 = 40.0;
const BOTTOM_MARGIN: f32 = 22.0;
const TOP_MARGIN: f32 = 8.0;
const RIGHT_MARGIN: f32 = 16.0;

pub fn render_chart_panel(ui: &mut egui::Ui, panel: &PanelController, colors: &ThemeColors) {
    let series = panel.series();

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(series.name()).strong().color(colors.trace));
        if let Some(last) = series.last() {
            ui.label(format!("{} @ {}", format_temperature(last.value), last.label));
        }
    });

    let (response, _painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let canvas = response.rect;
    ui.painter().rect_filled(canvas, 4.0, colors.extreme_background);

    let plot_rect = egui::Rect::from_min_max(
        egui::pos2(canvas.left() + LEFT_MARGIN, canvas.top() + TOP_MARGIN),
        egui::pos2(canvas.right() - RIGHT_MARGIN, canvas.bottom() - BOTTOM_MARGIN),
    );
    if plot_rect.width() <= 0.0 || plot_rect.height() <= 0.0 {
        return;
    }

    let axis = &panel.config().axis;
    axis_renderer::render_axes(ui, plot_rect, axis, colors);

    let positions = chart_renderer::point_positions(series, axis, panel.feed().interval(), plot_rect);
    chart_renderer::render_series(ui, plot_rect, &positions, colors);

    if let Some(hover_pos) = response.hover_pos() {
        if let Some(index) = chart_renderer::hovered_point(&positions, hover_pos) {
            let point = &series.points()[index];
            let text = format!("{}: {}", point.label, format_temperature(point.value));
            chart_renderer::render_hover_label(ui, positions[index], text, colors);
        }
    }
}
