//! Color mapping for panel widgets.
//!
//! Translates model-level styles (power button style, active mode) into theme
//! colors so the UI code never hardcodes a color.

use egui::Color32;
use hotplate::{ButtonStyle, ThemeColors, ThemeManager};

/// Returns the current theme's color palette, or Dark's for unknown names.
pub fn theme_colors<'a>(theme_manager: &'a ThemeManager, current_theme_name: &str) -> &'a ThemeColors {
    &theme_manager.get_theme_or_default(current_theme_name).colors
}

/// Fill color for the power button.
pub fn power_button_fill(style: ButtonStyle, colors: &ThemeColors) -> Color32 {
    match style {
        ButtonStyle::Success => colors.success,
        ButtonStyle::Danger => colors.danger,
    }
}

/// Fill color for a mode button; `None` keeps the default widget fill.
pub fn mode_button_fill(active: bool, colors: &ThemeColors) -> Option<Color32> {
    active.then_some(colors.active)
}
