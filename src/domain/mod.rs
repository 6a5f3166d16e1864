//! Domain logic for the panel GUI.
//!
//! Coordinate mapping between chart values and screen space lives here so it
//! can be tested without a window.

pub mod chart_operations;
