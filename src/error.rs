//! Error types for the fantasy cricket engine and CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FantasyError>;

#[derive(Error, Debug)]
pub enum FantasyError {
    #[error("Team exceeds budget: needs {needed} points but only {available} available")]
    BudgetExceeded { needed: u32, available: u32 },

    #[error("Player already in team: {name}")]
    DuplicatePlayer { name: String },

    #[error("Add at least one player to the team")]
    EmptyRoster,

    #[error("Team name required")]
    MissingName,

    #[error("Player not found: {name}")]
    UnknownPlayer { name: String },

    #[error("Team not found: {name}")]
    TeamNotFound { name: String },

    #[error("Invalid point value: {value} (must be a positive integer)")]
    InvalidPointValue { value: String },

    #[error("Invalid category: {category}")]
    InvalidCategory { category: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

impl FantasyError {
    /// True for rule violations a user can fix by changing their input.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            FantasyError::BudgetExceeded { .. }
                | FantasyError::DuplicatePlayer { .. }
                | FantasyError::EmptyRoster
                | FantasyError::MissingName
                | FantasyError::UnknownPlayer { .. }
                | FantasyError::TeamNotFound { .. }
                | FantasyError::InvalidCategory { .. }
                | FantasyError::InvalidPointValue { .. }
        )
    }

    /// Process exit code the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            FantasyError::Config { .. } => 2,
            _ => 1,
        }
    }
}
