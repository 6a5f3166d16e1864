//! Utility modules for the panel GUI.

pub mod formatting;

pub use formatting::{format_temperature, get_current_memory_mb, format_memory_mb};
