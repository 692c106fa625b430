//! Low-level primitives
//!
//! This module contains syntax profiles and the row classifier.

pub mod highlighter;
pub mod syntax;
