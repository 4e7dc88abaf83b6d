//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::category::Category;

#[derive(Debug, Parser)]
#[clap(name = "fantasy-cricket", about = "Fantasy cricket team builder and scorer")]
pub struct FantasyCricket {
    /// Path to the SQLite database (or set `FANTASY_CRICKET_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Show debug logging (or set `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the database tables and load the default player pool.
    Setup {
        /// Delete all players, stats, and teams before seeding.
        #[clap(long)]
        reset: bool,
    },

    /// List draftable players and their point values.
    Players {
        /// Only show one category: BAT | BWL | WK | AR
        #[clap(long, short)]
        category: Option<Category>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one player's listing, match stats, and score breakdown.
    Player {
        /// Player name (exact match).
        name: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Load match stats from a JSON file.
    ///
    /// The file holds an array of objects with a `player` name and any of the
    /// stat fields (`runs_scored`, `balls_faced`, `fours`, `sixes`,
    /// `balls_bowled`, `maidens`, `runs_conceded`, `wickets`, `catches`,
    /// `stumpings`, `run_outs`). Missing fields count as zero.
    ImportStats {
        /// Path to the stats file.
        file: PathBuf,
    },

    /// Build, save, and score teams.
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// Show the budget available to a new team.
    Create {
        /// Team name.
        name: String,
    },

    /// Save a team from a list of players, replacing any team with the same name.
    Save {
        /// Team name.
        name: String,

        /// Player to include (repeatable): `-p "MS Dhoni" -p "KL Rahul"`.
        #[clap(short = 'p', long = "player", required = true)]
        players: Vec<String>,
    },

    /// Add a player to a team, creating the team if needed.
    Add {
        /// Team name.
        name: String,

        /// Player to add.
        player: String,
    },

    /// Remove a player from a saved team.
    Remove {
        /// Team name.
        name: String,

        /// Player to remove.
        player: String,
    },

    /// Copy a saved team under a new name.
    Copy {
        /// Existing team name.
        from: String,

        /// New team name.
        to: String,
    },

    /// Show a saved team.
    Show {
        /// Team name.
        name: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List all saved teams, most recently saved first.
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Delete a saved team.
    Delete {
        /// Team name.
        name: String,
    },

    /// Score a saved team from its players' match stats.
    Score {
        /// Team name.
        name: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Score every saved team and rank them.
    Leaderboard {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
