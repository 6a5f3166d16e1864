//! Theme support for the hot-plate panel
//!
//! Each theme maps the panel's visual roles (success and danger buttons, the
//! active mode button, the temperature trace, chart grid) onto concrete colors.
//! Built-in themes are Light, Dark and Dracula.
//!
//! # Examples
//!
//! ```
//! use hotplate::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.get_theme("Dark").unwrap();
//! println!("Trace color: {:?}", dark.colors.trace);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Color palette for one theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Surfaces
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Text
    pub text: Color32,
    pub text_dim: Color32,

    // Widgets
    pub hover: Color32,
    pub border: Color32,
    /// Fill of whichever mode button is selected
    pub active: Color32,

    // Power button fills
    pub success: Color32,
    pub danger: Color32,

    // Chart
    pub trace: Color32,
    pub grid: Color32,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub dark: bool,
    pub colors: ThemeColors,
}

/// Lookup of the built-in themes by name
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    fallback: Theme,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [light_theme(), dark_theme(), dracula_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self {
            themes,
            fallback: dark_theme(),
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Looks up a theme, falling back to Dark for unknown names
    pub fn get_theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Theme names, sorted for a stable selector order
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.override_text_color = Some(colors.text);

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.weak_bg_fill = colors.hover;
        visuals.widgets.hovered.weak_bg_fill = colors.hover;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;

        visuals.selection.bg_fill = colors.active;
        visuals.error_fg_color = colors.danger;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        dark: false,
        colors: ThemeColors {
            panel_background: Color32::from_rgb(248, 249, 250),
            extreme_background: Color32::from_rgb(255, 255, 255),
            text: Color32::from_rgb(33, 37, 41),
            text_dim: Color32::from_rgb(108, 117, 125),
            hover: Color32::from_rgb(222, 226, 230),
            border: Color32::from_rgb(206, 212, 218),
            active: Color32::from_rgb(13, 110, 253),
            success: Color32::from_rgb(25, 135, 84),
            danger: Color32::from_rgb(220, 53, 69),
            trace: Color32::from_rgb(255, 0, 0),
            grid: Color32::from_rgb(200, 200, 200),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        dark: true,
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),
            text: Color32::from_rgb(240, 240, 240),
            text_dim: Color32::from_rgb(160, 160, 160),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),
            active: Color32::from_rgb(52, 152, 219),
            success: Color32::from_rgb(46, 164, 79),
            danger: Color32::from_rgb(231, 76, 60),
            trace: Color32::from_rgb(255, 64, 64),
            grid: Color32::from_rgb(80, 80, 80),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        dark: true,
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),
            active: hex_to_color32("#bd93f9"),
            success: hex_to_color32("#50fa7b"),
            danger: hex_to_color32("#ff5555"),
            trace: hex_to_color32("#ff5555"),
            grid: hex_to_color32("#44475a"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32.
///
/// Anything that is not six ASCII hex digits yields black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Same color with a different alpha
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
