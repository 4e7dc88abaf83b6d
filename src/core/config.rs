//! Runtime configuration: database location and points budget.
//!
//! Each setting resolves from an explicit value first, then its environment
//! variable, then a built-in default.

use std::path::PathBuf;

use crate::{roster::TeamBudget, FantasyError, Result};

pub const DB_PATH_ENV_VAR: &str = "FANTASY_CRICKET_DB";
pub const BUDGET_ENV_VAR: &str = "FANTASY_CRICKET_BUDGET";

/// Path: ~/.local/share/fantasy-cricket/fantasy_cricket.db (platform data dir)
pub fn default_db_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local");
        home.push("share");
        home
    });
    base.join("fantasy-cricket").join("fantasy_cricket.db")
}

/// Resolve the database path from a flag, then `FANTASY_CRICKET_DB`.
pub fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    db_path_from(flag, std::env::var(DB_PATH_ENV_VAR).ok())
}

fn db_path_from(flag: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    flag.or_else(|| {
        env_value
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    })
    .unwrap_or_else(default_db_path)
}

/// Resolve the points budget from `FANTASY_CRICKET_BUDGET`.
pub fn resolve_budget() -> Result<TeamBudget> {
    budget_from(std::env::var(BUDGET_ENV_VAR).ok().as_deref())
}

fn budget_from(env_value: Option<&str>) -> Result<TeamBudget> {
    let Some(raw) = env_value else {
        return Ok(TeamBudget::default());
    };
    match raw.trim().parse::<u32>() {
        Ok(total) if total > 0 => Ok(TeamBudget::with_budget(total)),
        _ => Err(FantasyError::Config {
            message: format!("{BUDGET_ENV_VAR} must be a positive integer, got {raw:?}"),
        }),
    }
}
