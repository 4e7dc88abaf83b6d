//! Type-safe wrappers and enums for fantasy cricket data.

pub mod category;
pub mod points;
