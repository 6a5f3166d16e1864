//! UI layout state management.
//!
//! Sizes the operator can drag, persisted between runs.

use serde::{Deserialize, Serialize};

const MIN_OPTIONS_WIDTH: f32 = 180.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    /// Width of the left options panel (mode buttons, profile grid)
    options_width: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self { options_width: 320.0 }
    }
}

impl LayoutState {
    pub fn options_width(&self) -> f32 {
        self.options_width
    }

    /// Records the width the side panel ended up with after a drag.
    pub fn set_options_width(&mut self, width: f32) {
        self.options_width = width.max(MIN_OPTIONS_WIDTH);
    }
}
