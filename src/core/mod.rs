//! Core utilities for the fantasy cricket CLI
//!
//! - `config`: database path and budget resolution

pub mod config;

// Re-export commonly used items for convenience
pub use config::{default_db_path, resolve_budget, resolve_db_path};
