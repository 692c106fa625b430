//! Thin wrappers around the OS: terminal, files and logging

pub mod fs;
pub mod terminal;
pub mod tracing_setup;
