//! View and UI layer
//!
//! This module contains presentation-related modules: viewport scrolling, the frame
//! composer, the status bar and colors.

pub mod render;
pub mod status_bar;
pub mod theme;
pub mod viewport;
