//! Fantasy Cricket Library
//!
//! Build fantasy cricket teams under a points budget and score them from
//! per-match statistics.
//!
//! ## Features
//!
//! - **Scoring Engine**: Deterministic integer scores from batting, bowling, and fielding stats
//! - **Budget Validation**: Every add and every save is checked against the points budget
//! - **Database Storage**: Player pool, match stats, and saved teams in a local SQLite file
//! - **Leaderboards**: Score all saved teams in parallel
//!
//! ## Quick Start
//!
//! ```rust
//! use fantasy_cricket::{score, PlayerMatchStats, Roster, TeamBudget, PointValue};
//!
//! let stats = PlayerMatchStats {
//!     runs_scored: 80,
//!     balls_faced: 55,
//!     fours: 8,
//!     sixes: 1,
//!     ..Default::default()
//! };
//! assert_eq!(score(&stats), 61);
//!
//! let budget = TeamBudget::default();
//! let mut roster = Roster::new("Mumbai Mavericks");
//! budget.add_player(&mut roster, "Rohit Sharma", PointValue::new(10)).unwrap();
//! assert_eq!(budget.remaining(&roster), 90);
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FANTASY_CRICKET_DB=~/cricket.db   # database location
//! export FANTASY_CRICKET_BUDGET=100        # points budget per team
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod roster;
pub mod scoring;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{category::Category, points::PointValue};
pub use error::{FantasyError, Result};
pub use roster::{total_cost, ListingLookup, PlayerListing, Roster, TeamBudget, TOTAL_BUDGET};
pub use scoring::{
    breakdown, score, score_player, score_team, PlayerMatchStats, ScoreBreakdown, StatsLookup,
    TeamScore,
};
