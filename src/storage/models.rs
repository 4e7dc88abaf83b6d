//! Data models for the storage layer

use crate::scoring::PlayerMatchStats;
use serde::{Deserialize, Serialize};

/// One player's match stats as imported from a stats file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub player: String,
    #[serde(flatten)]
    pub stats: PlayerMatchStats,
}

/// Summary row for a saved team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub name: String,
    pub players: Vec<String>,
    pub points_used: u32,
    pub saved_at: u64,
}

impl TeamSummary {
    /// The saved team as a roster ready for further edits
    pub fn into_roster(self) -> crate::roster::Roster {
        crate::roster::Roster::from_parts(self.name, self.players, self.points_used)
    }
}
