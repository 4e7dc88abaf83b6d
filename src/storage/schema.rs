//! Database schema and connection management

use crate::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Database connection manager for players, match stats, and saved teams
pub struct PlayerDatabase {
    pub(crate) conn: Connection,
}

impl PlayerDatabase {
    /// Open (or create) the database at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create an in-memory database, used by tests and dry runs
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                name TEXT PRIMARY KEY,
                category TEXT NOT NULL,
                value INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS match_stats (
                player TEXT PRIMARY KEY,
                runs_scored INTEGER NOT NULL DEFAULT 0,
                balls_faced INTEGER NOT NULL DEFAULT 0,
                fours INTEGER NOT NULL DEFAULT 0,
                sixes INTEGER NOT NULL DEFAULT 0,
                balls_bowled INTEGER NOT NULL DEFAULT 0,
                maidens INTEGER NOT NULL DEFAULT 0,
                runs_conceded INTEGER NOT NULL DEFAULT 0,
                wickets INTEGER NOT NULL DEFAULT 0,
                catches INTEGER NOT NULL DEFAULT 0,
                stumpings INTEGER NOT NULL DEFAULT 0,
                run_outs INTEGER NOT NULL DEFAULT 0,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        // Players are stored as a JSON array so names may contain commas
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                name TEXT PRIMARY KEY,
                players TEXT NOT NULL,
                points_used INTEGER NOT NULL,
                saved_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_players_category
             ON players(category, value)",
            [],
        )?;

        Ok(())
    }
}
