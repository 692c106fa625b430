//! Document model: rows and the row store

pub mod document;
pub mod row;
