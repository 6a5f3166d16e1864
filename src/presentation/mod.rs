//! Presentation layer for visual styling and color mapping.
//!
//! Keeps color decisions out of the panel model:
//! - Power and mode button fills
//! - Theme palette lookup

pub mod color_mapping;
