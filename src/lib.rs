//! A small full-screen terminal text editor.

pub mod app;
pub mod config;
pub mod input;
pub mod model;
pub mod primitives;
pub mod prompt;
pub mod services;
pub mod state;
pub mod view;
