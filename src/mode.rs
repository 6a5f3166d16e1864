//! Reflow/Heat mode selection.
//!
//! Panel visibility and the "active" mark on the mode buttons are derived from
//! the single selected mode, so they can never disagree.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiMode {
    Reflow,
    Heat,
}

impl UiMode {
    pub fn label(self) -> &'static str {
        match self {
            UiMode::Reflow => "Reflow",
            UiMode::Heat => "Heat",
        }
    }
}

/// Which mode, if any, the operator has picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeSwitch {
    selected: Option<UiMode>,
}

impl ModeSwitch {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn select(&mut self, mode: UiMode) {
        self.selected = Some(mode);
    }

    pub fn selected(&self) -> Option<UiMode> {
        self.selected
    }

    /// The shared options area appears once either mode has been picked.
    pub fn mode_options_visible(&self) -> bool {
        self.selected.is_some()
    }

    pub fn reflow_options_visible(&self) -> bool {
        self.selected == Some(UiMode::Reflow)
    }

    pub fn heat_options_visible(&self) -> bool {
        self.selected == Some(UiMode::Heat)
    }

    pub fn is_active(&self, mode: UiMode) -> bool {
        self.selected == Some(mode)
    }
}
