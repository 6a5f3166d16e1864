//! GUI-only state (no panel semantics):
//! - Theme state (theme manager, current theme)
//! - Layout state (side panel width)

mod theme_state;
mod layout_state;

pub use theme_state::ThemeState;
pub use layout_state::LayoutState;
