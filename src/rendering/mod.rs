//! Rendering subsystem for the temperature chart
//!
//! - Axis rendering (minute:second ticks, temperature labels, gridlines)
//! - Series rendering (trace polyline, markers, hover label)

pub mod axis_renderer;
pub mod chart_renderer;
