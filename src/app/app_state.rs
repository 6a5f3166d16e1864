//! Centralized application state for the panel GUI.
//!
//! The panel semantics live in [`PanelController`]; this struct only adds what
//! the window needs on top of it (theme, layout, the current error line).

use hotplate::{PanelConfig, PanelController};
use crate::state::{LayoutState, ThemeState};

pub struct AppState {
    /// Mode switch, profile grid, power button and chart feed
    pub panel: PanelController,

    /// Theme and styling state
    pub theme: ThemeState,

    /// UI layout state
    pub layout: LayoutState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PanelConfig::default(), "Dark".to_string(), LayoutState::default())
    }
}

impl AppState {
    /// Creates the state from settings restored out of storage.
    pub fn new(config: PanelConfig, theme_name: String, layout: LayoutState) -> Self {
        Self {
            panel: PanelController::new(config),
            theme: ThemeState::with_theme(theme_name),
            layout,
            error_message: None,
        }
    }
}
