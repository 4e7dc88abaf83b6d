//! Fantasy score computation from per-match cricket statistics.
//!
//! Scoring is a pure function of one player's [`PlayerMatchStats`]: every
//! contribution is additive and non-negative, so a better performance in any
//! counted category never lowers the score. Threshold checks on strike rate and
//! economy are done with integer cross-multiplication, keeping boundary values
//! such as an economy of exactly 3.5 stable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{roster::Roster, Result};

#[cfg(test)]
mod tests;

// Points per unit for the linear terms.
const WICKET_POINTS: u32 = 10;
const FIELDING_POINTS: u32 = 10;
const FOUR_POINTS: u32 = 1;
const SIX_POINTS: u32 = 2;

/// One player's aggregated match performance.
///
/// Missing fields deserialize to zero, so partial records (a specialist
/// batsman with no bowling figures) are valid input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerMatchStats {
    pub runs_scored: u32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
    pub balls_bowled: u32,
    pub maidens: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub catches: u32,
    pub stumpings: u32,
    pub run_outs: u32,
}

/// The individual terms that make up a fantasy score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub batting: u32,
    pub milestone: u32,
    pub strike_rate: u32,
    pub boundaries: u32,
    pub wickets: u32,
    pub wicket_milestone: u32,
    pub economy: u32,
    pub fielding: u32,
}

impl ScoreBreakdown {
    /// Sum of every term.
    pub fn total(&self) -> u32 {
        [
            self.batting,
            self.milestone,
            self.strike_rate,
            self.boundaries,
            self.wickets,
            self.wicket_milestone,
            self.economy,
            self.fielding,
        ]
        .iter()
        .fold(0u32, |acc, term| acc.saturating_add(*term))
    }
}

/// Source of match statistics keyed by player name.
pub trait StatsLookup {
    /// Stats for `name`, or `None` when the player has no recorded match data.
    fn player_stats(&self, name: &str) -> Result<Option<PlayerMatchStats>>;
}

impl StatsLookup for HashMap<String, PlayerMatchStats> {
    fn player_stats(&self, name: &str) -> Result<Option<PlayerMatchStats>> {
        Ok(self.get(name).copied())
    }
}

/// Compute the fantasy score for one player's match.
pub fn score(stats: &PlayerMatchStats) -> u32 {
    breakdown(stats).total()
}

/// Compute each scoring term for one player's match.
pub fn breakdown(stats: &PlayerMatchStats) -> ScoreBreakdown {
    ScoreBreakdown {
        batting: stats.runs_scored / 2,
        milestone: batting_milestone_bonus(stats.runs_scored),
        strike_rate: strike_rate_bonus(stats.runs_scored, stats.balls_faced),
        boundaries: stats
            .fours
            .saturating_mul(FOUR_POINTS)
            .saturating_add(stats.sixes.saturating_mul(SIX_POINTS)),
        wickets: stats.wickets.saturating_mul(WICKET_POINTS),
        wicket_milestone: wicket_milestone_bonus(stats.wickets),
        economy: economy_bonus(stats.runs_conceded, stats.balls_bowled),
        fielding: stats
            .catches
            .saturating_add(stats.stumpings)
            .saturating_add(stats.run_outs)
            .saturating_mul(FIELDING_POINTS),
    }
}

/// Score a player by name; players without match data score zero.
pub fn score_player<L: StatsLookup + ?Sized>(name: &str, lookup: &L) -> Result<u32> {
    Ok(lookup
        .player_stats(name)?
        .map(|stats| score(&stats))
        .unwrap_or(0))
}

fn batting_milestone_bonus(runs: u32) -> u32 {
    if runs >= 100 {
        10
    } else if runs >= 50 {
        5
    } else {
        0
    }
}

/// Strike rate is `runs / balls * 100`; no balls faced means no bonus.
fn strike_rate_bonus(runs: u32, balls: u32) -> u32 {
    if balls == 0 {
        return 0;
    }
    let runs = u64::from(runs);
    let balls = u64::from(balls);

    // sr > 100  <=>  runs > balls
    // sr >= 80  <=>  5 * runs >= 4 * balls
    if runs > balls {
        6
    } else if 5 * runs >= 4 * balls {
        2
    } else {
        0
    }
}

fn wicket_milestone_bonus(wickets: u32) -> u32 {
    if wickets >= 5 {
        10
    } else if wickets >= 3 {
        5
    } else {
        0
    }
}

/// Economy is runs conceded per six-ball over. Poor economy earns nothing
/// rather than a penalty, and no balls bowled skips the bonus entirely.
fn economy_bonus(runs_conceded: u32, balls_bowled: u32) -> u32 {
    if balls_bowled == 0 {
        return 0;
    }
    // economy = 6r / b; compare against each band edge without division.
    let r = u64::from(runs_conceded);
    let b = u64::from(balls_bowled);

    if 3 * r < b {
        // economy < 2
        10
    } else if 12 * r < 7 * b {
        // 2 <= economy < 3.5
        7
    } else if 4 * r <= 3 * b {
        // 3.5 <= economy <= 4.5
        4
    } else {
        0
    }
}

/// A single player's contribution to a team score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub name: String,
    pub score: u32,
}

/// Scores for every player on a roster, in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub team_name: String,
    pub total_score: u32,
    pub player_scores: Vec<PlayerScore>,
    pub player_count: usize,
}

/// Score every player on `roster` and sum the results.
pub fn score_team<L: StatsLookup + ?Sized>(roster: &Roster, lookup: &L) -> Result<TeamScore> {
    let mut player_scores = Vec::with_capacity(roster.players().len());
    let mut total_score = 0u32;

    for name in roster.players() {
        let score = score_player(name, lookup)?;
        total_score = total_score.saturating_add(score);
        player_scores.push(PlayerScore {
            name: name.clone(),
            score,
        });
    }

    Ok(TeamScore {
        team_name: roster.name.clone(),
        total_score,
        player_count: player_scores.len(),
        player_scores,
    })
}
