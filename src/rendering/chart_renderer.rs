//! Temperature trace rendering
//!
//! Draws the series as a polyline with a marker per reading, plus a hover
//! label for the reading closest to the cursor.

use std::time::Duration;
use eframe::egui;
use egui::Color32;
use hotplate::{AxisConfig, ChartSeries, ThemeColors};
use crate::domain::chart_operations;

const MARKER_RADIUS: f32 = 3.0;
const HOVER_DISTANCE: f32 = 8.0;

/// Screen positions of the readings that fit on the x-axis, in order.
///
/// Readings past `x_max` are left out rather than stacked on the right edge.
pub fn point_positions(
    series: &ChartSeries,
    axis: &AxisConfig,
    interval: Duration,
    plot_rect: egui::Rect,
) -> Vec<egui::Pos2> {
    let visible = chart_operations::visible_point_count(series.len(), interval, axis);
    series
        .values()
        .take(visible)
        .enumerate()
        .map(|(i, temp)| {
            let secs = chart_operations::sample_secs(i, interval);
            egui::pos2(
                chart_operations::secs_to_x(secs, axis, plot_rect),
                chart_operations::temp_to_y(temp, axis, plot_rect),
            )
        })
        .collect()
}

/// Renders the series inside `plot_rect`
pub fn render_series(
    ui: &egui::Ui,
    plot_rect: egui::Rect,
    positions: &[egui::Pos2],
    colors: &ThemeColors,
) {
    let painter = ui.painter_at(plot_rect.expand(MARKER_RADIUS));
    let stroke = egui::Stroke::new(2.0, colors.trace);

    if positions.len() > 1 {
        painter.add(egui::Shape::line(positions.to_vec(), stroke));
    }
    for pos in positions {
        painter.circle_filled(*pos, MARKER_RADIUS, colors.trace);
    }
}

/// Index of the reading nearest to `hover_pos`, if one is close enough.
pub fn hovered_point(positions: &[egui::Pos2], hover_pos: egui::Pos2) -> Option<usize> {
    positions
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance(hover_pos)))
        .filter(|(_, d)| *d <= HOVER_DISTANCE)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Draws "label: value °C" next to a hovered reading.
pub fn render_hover_label(ui: &egui::Ui, pos: egui::Pos2, text: String, colors: &ThemeColors) {
    let painter = ui.painter();
    let galley = painter.layout_no_wrap(text, egui::FontId::proportional(12.0), colors.text);
    let padding = egui::vec2(4.0, 2.0);
    let origin = pos + egui::vec2(8.0, -galley.size().y - 8.0);
    let bg = egui::Rect::from_min_size(origin - padding, galley.size() + padding * 2.0);

    painter.rect_filled(bg, 2.0, Color32::from_rgba_unmultiplied(0, 0, 0, 200));
    painter.circle_stroke(pos, MARKER_RADIUS + 2.0, egui::Stroke::new(1.5, colors.trace));
    painter.galley(origin, galley, colors.text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotplate::ChartPoint;

    #[test]
    fn test_hovered_point_picks_nearest_within_reach() {
        let positions = vec![egui::pos2(0.0, 0.0), egui::pos2(10.0, 0.0), egui::pos2(20.0, 0.0)];
        assert_eq!(hovered_point(&positions, egui::pos2(9.0, 1.0)), Some(1));
        assert_eq!(hovered_point(&positions, egui::pos2(100.0, 100.0)), None);
    }

    #[test]
    fn test_positions_advance_by_interval() {
        let mut series = ChartSeries::default();
        series.push(ChartPoint { label: "0:01".into(), value: 20.0 });
        series.push(ChartPoint { label: "0:02".into(), value: 260.0 });
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(600.0, 240.0));

        let positions = point_positions(&series, &AxisConfig::default(), Duration::from_secs(300), rect);
        assert_eq!(positions, vec![egui::pos2(0.0, 240.0), egui::pos2(300.0, 0.0)]);
    }

    #[test]
    fn test_positions_stop_at_right_edge() {
        let mut series = ChartSeries::default();
        for value in [20.0, 80.0, 140.0, 200.0, 260.0] {
            series.push(ChartPoint { label: "0:00".into(), value });
        }
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(600.0, 240.0));

        let positions = point_positions(&series, &AxisConfig::default(), Duration::from_secs(300), rect);
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[2].x, 600.0);
    }
}
