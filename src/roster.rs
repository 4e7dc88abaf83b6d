//! Team rosters and the points-budget rules that govern them.
//!
//! A [`Roster`] is a plain value: it is built up by [`TeamBudget::add_player`]
//! and [`TeamBudget::remove_player`], validated by
//! [`TeamBudget::validate_for_save`], and handed to storage. Nothing here keeps
//! a "current team" around between calls.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Category, FantasyError, PointValue, Result};


/// Total points a roster may spend.
pub const TOTAL_BUDGET: u32 = 100;

/// A draftable player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerListing {
    pub name: String,
    pub category: Category,
    pub value: PointValue,
}

impl PlayerListing {
    pub fn new(name: impl Into<String>, category: Category, value: u32) -> Self {
        Self {
            name: name.into(),
            category,
            value: PointValue::new(value),
        }
    }
}

/// Source of player listings keyed by player name.
pub trait ListingLookup {
    /// Listing for `name`, or `None` when no such player is draftable.
    fn player_listing(&self, name: &str) -> Result<Option<PlayerListing>>;
}

impl ListingLookup for HashMap<String, PlayerListing> {
    fn player_listing(&self, name: &str) -> Result<Option<PlayerListing>> {
        Ok(self.get(name).cloned())
    }
}

/// A named team under construction or as saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub name: String,
    players: Vec<String>,
    points_used: u32,
}

impl Roster {
    /// Start an empty roster.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
            points_used: 0,
        }
    }

    /// Rebuild a roster from stored parts.
    pub(crate) fn from_parts(name: String, players: Vec<String>, points_used: u32) -> Self {
        Self {
            name,
            players,
            points_used,
        }
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn points_used(&self) -> u32 {
        self.points_used
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Same players under a different team name.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Sum of listing values over the roster's players.
///
/// Players without a listing count as zero.
pub fn total_cost<L: ListingLookup + ?Sized>(roster: &Roster, listings: &L) -> Result<u32> {
    let mut total = 0u32;
    for name in roster.players() {
        total = total.saturating_add(listing_cost(name, listings)?);
    }
    Ok(total)
}

fn listing_cost<L: ListingLookup + ?Sized>(name: &str, listings: &L) -> Result<u32> {
    Ok(listings
        .player_listing(name)?
        .map(|listing| listing.value.as_u32())
        .unwrap_or(0))
}

/// Enforces the points budget on roster changes and saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamBudget {
    total: u32,
}

impl Default for TeamBudget {
    fn default() -> Self {
        Self {
            total: TOTAL_BUDGET,
        }
    }
}

impl TeamBudget {
    pub fn with_budget(total: u32) -> Self {
        Self { total }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Points still available to `roster`.
    pub fn remaining(&self, roster: &Roster) -> u32 {
        self.total.saturating_sub(roster.points_used)
    }

    /// Whether `candidate` at `value` could be added to `roster`.
    pub fn can_add(&self, roster: &Roster, candidate: &str, value: PointValue) -> bool {
        self.check_add(roster, candidate, value).is_ok()
    }

    fn check_add(&self, roster: &Roster, candidate: &str, value: PointValue) -> Result<()> {
        if roster.contains(candidate) {
            return Err(FantasyError::DuplicatePlayer {
                name: candidate.to_string(),
            });
        }
        let needed = value.as_u32();
        let fits = roster
            .points_used
            .checked_add(needed)
            .is_some_and(|after| after <= self.total);
        if !fits {
            return Err(FantasyError::BudgetExceeded {
                needed,
                available: self.remaining(roster),
            });
        }
        Ok(())
    }

    /// Append `candidate` and charge `value` against the budget.
    ///
    /// On rejection the roster is left untouched.
    pub fn add_player(&self, roster: &mut Roster, candidate: &str, value: PointValue) -> Result<()> {
        self.check_add(roster, candidate, value)?;
        roster.players.push(candidate.to_string());
        roster.points_used += value.as_u32();
        debug!(
            team = %roster.name,
            player = candidate,
            points_used = roster.points_used,
            "added player"
        );
        Ok(())
    }

    /// Resolve `candidate`'s cost from `listings`, then add them.
    pub fn add_listed_player<L: ListingLookup + ?Sized>(
        &self,
        roster: &mut Roster,
        candidate: &str,
        listings: &L,
    ) -> Result<()> {
        let listing =
            listings
                .player_listing(candidate)?
                .ok_or_else(|| FantasyError::UnknownPlayer {
                    name: candidate.to_string(),
                })?;
        self.add_player(roster, candidate, listing.value)
    }

    /// Remove the first occurrence of `candidate`.
    ///
    /// The refund is looked up again from `listings` rather than remembered
    /// from the add, so a changed listing cannot leave `points_used` stale.
    pub fn remove_player<L: ListingLookup + ?Sized>(
        &self,
        roster: &mut Roster,
        candidate: &str,
        listings: &L,
    ) -> Result<()> {
        let index = roster
            .players
            .iter()
            .position(|p| p == candidate)
            .ok_or_else(|| FantasyError::UnknownPlayer {
                name: candidate.to_string(),
            })?;
        let cost = listing_cost(candidate, listings)?;

        roster.players.remove(index);
        roster.points_used = match roster.points_used.checked_sub(cost) {
            Some(points) => points,
            None => total_cost(roster, listings)?,
        };
        debug!(
            team = %roster.name,
            player = candidate,
            points_used = roster.points_used,
            "removed player"
        );
        Ok(())
    }

    /// Resume building a stored roster with `points_used` recomputed from the
    /// current listings.
    ///
    /// The stored total reflects listing values at save time; adds and removes
    /// must be checked against what the players cost now.
    pub fn reload<L: ListingLookup + ?Sized>(
        &self,
        mut roster: Roster,
        listings: &L,
    ) -> Result<Roster> {
        let cost = total_cost(&roster, listings)?;
        if cost != roster.points_used {
            debug!(
                team = %roster.name,
                stored = roster.points_used,
                current = cost,
                "points used changed since save"
            );
            roster.points_used = cost;
        }
        Ok(roster)
    }

    /// Check a roster is fit to persist and return it with a recomputed cost.
    ///
    /// The total is recomputed from listings so that a budget or listing change
    /// since the players were added is still caught here.
    pub fn validate_for_save<L: ListingLookup + ?Sized>(
        &self,
        mut roster: Roster,
        listings: &L,
    ) -> Result<Roster> {
        if roster.name.trim().is_empty() {
            return Err(FantasyError::MissingName);
        }
        if roster.is_empty() {
            return Err(FantasyError::EmptyRoster);
        }
        let cost = total_cost(&roster, listings)?;
        if cost > self.total {
            return Err(FantasyError::BudgetExceeded {
                needed: cost,
                available: self.total,
            });
        }
        roster.points_used = cost;
        Ok(roster)
    }
}
