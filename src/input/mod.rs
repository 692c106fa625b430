//! Input handling

pub mod keys;
