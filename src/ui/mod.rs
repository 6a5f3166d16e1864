//! UI panel rendering subsystem
//!
//! - Header panel (feed source controls, theme selector)
//! - Options panel (mode buttons, reflow profile grid, power button)
//! - Chart panel (temperature line chart)
//! - Status bar (feed state, memory)
//! - Panel manager (layout and interaction routing)

pub mod header;
pub mod options_panel;
pub mod chart_panel;
pub mod status_bar;
pub mod panel_manager;
