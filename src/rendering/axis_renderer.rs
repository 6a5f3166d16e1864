//! Chart axis rendering
//!
//! Draws the minute:second x-axis ticks, the temperature y-axis labels and the
//! gridlines behind the plot.

use eframe::egui;
use hotplate::{format_axis_tick, with_alpha, AxisConfig, ThemeColors};
use crate::domain::chart_operations;

const Y_TICK_STEP: f64 = 40.0;

/// Renders gridlines and tick labels around `plot_rect`
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `plot_rect` - Area the data is plotted in; labels go outside it
/// * `axis` - Axis ranges
/// * `colors` - Current theme palette
pub fn render_axes(ui: &egui::Ui, plot_rect: egui::Rect, axis: &AxisConfig, colors: &ThemeColors) {
    let painter = ui.painter();
    let grid_stroke = egui::Stroke::new(1.0, with_alpha(colors.grid, 160));
    let font = egui::FontId::proportional(10.0);

    for tick in axis.x_ticks() {
        let x = chart_operations::secs_to_x(tick as f64, axis, plot_rect);
        painter.line_segment(
            [egui::pos2(x, plot_rect.top()), egui::pos2(x, plot_rect.bottom())],
            grid_stroke,
        );
        painter.text(
            egui::pos2(x, plot_rect.bottom() + 4.0),
            egui::Align2::CENTER_TOP,
            format_axis_tick(tick),
            font.clone(),
            colors.text_dim,
        );
    }

    for temp in chart_operations::y_ticks(axis, Y_TICK_STEP) {
        let y = chart_operations::temp_to_y(temp, axis, plot_rect);
        painter.line_segment(
            [egui::pos2(plot_rect.left(), y), egui::pos2(plot_rect.right(), y)],
            grid_stroke,
        );
        painter.text(
            egui::pos2(plot_rect.left() - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            format!("{:.0}", temp),
            font.clone(),
            colors.text_dim,
        );
    }

    painter.rect_stroke(
        plot_rect,
        0.0,
        egui::Stroke::new(1.0, colors.border),
        egui::StrokeKind::Inside,
    );
}
