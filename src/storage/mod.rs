//! Storage layer for the fantasy cricket CLI
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Basic CRUD operations and the lookup trait impls
//! - `seed`: The default player pool

pub mod models;
pub mod queries;
pub mod schema;
pub mod seed;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::PlayerDatabase;
pub use seed::default_listings;
