//! Common utilities and helper functions shared across commands.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::{
    core::config::{resolve_budget, resolve_db_path},
    roster::TeamBudget,
    storage::PlayerDatabase,
    Result,
};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub db: PlayerDatabase,
    pub budget: TeamBudget,
}

impl CommandContext {
    /// Open the configured database and resolve the points budget
    pub fn open(db_path: Option<PathBuf>) -> Result<Self> {
        let path = resolve_db_path(db_path);
        let budget = resolve_budget()?;
        debug!(path = %path.display(), budget = budget.total(), "initializing command context");

        let db = PlayerDatabase::open(&path)?;
        Ok(Self { db, budget })
    }

    /// Context over an in-memory database
    pub fn in_memory(budget: TeamBudget) -> Result<Self> {
        Ok(Self {
            db: PlayerDatabase::new_in_memory()?,
            budget,
        })
    }
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
    Ok(())
}
