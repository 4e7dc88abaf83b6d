//! Player category types for cricket squads.

use crate::error::FantasyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role a player is drafted under.
///
/// Categories are informational only: they group the player pool for
/// browsing and play no part in scoring or budget checks.
///
/// # Examples
///
/// ```rust
/// use fantasy_cricket::Category;
///
/// let wk: Category = "wk".parse().unwrap();
/// assert_eq!(wk, Category::WK);
/// assert_eq!(wk.to_string(), "WK");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    BAT,
    BWL,
    WK,
    AR,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [Category::BAT, Category::BWL, Category::WK, Category::AR];

    /// Human-readable plural label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            Category::BAT => "Batsmen",
            Category::BWL => "Bowlers",
            Category::WK => "Wicket Keepers",
            Category::AR => "All Rounders",
        }
    }

    /// Short code stored in the database.
    pub fn code(&self) -> &'static str {
        match self {
            Category::BAT => "BAT",
            Category::BWL => "BWL",
            Category::WK => "WK",
            Category::AR => "AR",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Category {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BAT" | "BATSMAN" | "BATTER" => Ok(Category::BAT),
            "BWL" | "BOWLER" => Ok(Category::BWL),
            "WK" | "WICKETKEEPER" | "KEEPER" => Ok(Category::WK),
            "AR" | "ALLROUNDER" | "ALL-ROUNDER" => Ok(Category::AR),
            _ => Err(FantasyError::InvalidCategory {
                category: s.to_string(),
            }),
        }
    }
}
