//! Basic database query operations

use super::{models::*, schema::PlayerDatabase};
use crate::{
    roster::{ListingLookup, PlayerListing, Roster},
    scoring::{PlayerMatchStats, StatsLookup},
    Category, FantasyError, PointValue, Result,
};
use rusqlite::{params, types::Type, OptionalExtension, Row};
use std::{
    collections::HashMap,
    time::{SystemTime, UNIX_EPOCH},
};
use tracing::{debug, info};

const UPSERT_MATCH_STATS: &str = "INSERT OR REPLACE INTO match_stats
     (player, runs_scored, balls_faced, fours, sixes, balls_bowled, maidens,
      runs_conceded, wickets, catches, stumpings, run_outs, updated_at)
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

impl PlayerDatabase {
    /// Insert or update a player listing
    pub fn upsert_listing(&mut self, listing: &PlayerListing) -> Result<()> {
        if !listing.value.is_positive() {
            return Err(FantasyError::InvalidPointValue {
                value: format!("{} for {}", listing.value, listing.name),
            });
        }
        self.conn.execute(
            "INSERT OR REPLACE INTO players (name, category, value) VALUES (?, ?, ?)",
            params![
                listing.name,
                listing.category.code(),
                listing.value.as_u32()
            ],
        )?;
        Ok(())
    }

    /// Get the listing for a single player
    pub fn get_listing(&self, name: &str) -> Result<Option<PlayerListing>> {
        let listing = self
            .conn
            .query_row(
                "SELECT name, category, value FROM players WHERE name = ?",
                params![name],
                row_to_listing,
            )
            .optional()?;
        Ok(listing)
    }

    /// List players, optionally restricted to one category.
    /// Most expensive first, then alphabetical.
    pub fn list_listings(&self, category: Option<Category>) -> Result<Vec<PlayerListing>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, category, value FROM players
             WHERE (?1 IS NULL OR category = ?1)
             ORDER BY value DESC, name",
        )?;

        let rows = stmt.query_map(params![category.map(|c| c.code())], row_to_listing)?;

        let mut listings = Vec::new();
        for row in rows {
            listings.push(row?);
        }
        Ok(listings)
    }

    /// Number of draftable players
    pub fn count_listings(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Insert or replace the match stats for a player
    pub fn upsert_match_stats(&mut self, player: &str, stats: &PlayerMatchStats) -> Result<()> {
        let now = unix_now();
        self.conn.execute(
            UPSERT_MATCH_STATS,
            params![
                player,
                stats.runs_scored,
                stats.balls_faced,
                stats.fours,
                stats.sixes,
                stats.balls_bowled,
                stats.maidens,
                stats.runs_conceded,
                stats.wickets,
                stats.catches,
                stats.stumpings,
                stats.run_outs,
                now
            ],
        )?;
        Ok(())
    }

    /// Import a batch of stats records in one transaction
    pub fn import_match_stats(&mut self, records: &[StatsRecord]) -> Result<usize> {
        let now = unix_now();
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(UPSERT_MATCH_STATS)?;
            for record in records {
                let s = &record.stats;
                stmt.execute(params![
                    record.player,
                    s.runs_scored,
                    s.balls_faced,
                    s.fours,
                    s.sixes,
                    s.balls_bowled,
                    s.maidens,
                    s.runs_conceded,
                    s.wickets,
                    s.catches,
                    s.stumpings,
                    s.run_outs,
                    now
                ])?;
            }
        }
        tx.commit()?;
        info!(count = records.len(), "imported match stats");
        Ok(records.len())
    }

    /// Get the match stats for a player
    pub fn get_match_stats(&self, player: &str) -> Result<Option<PlayerMatchStats>> {
        let stats = self
            .conn
            .query_row(
                "SELECT runs_scored, balls_faced, fours, sixes, balls_bowled, maidens,
                        runs_conceded, wickets, catches, stumpings, run_outs
                 FROM match_stats WHERE player = ?",
                params![player],
                row_to_match_stats,
            )
            .optional()?;
        Ok(stats)
    }

    /// Load the match stats for many players at once.
    /// Players without stats are left out of the map.
    pub fn match_stats_for(&self, players: &[String]) -> Result<HashMap<String, PlayerMatchStats>> {
        let mut stats = HashMap::with_capacity(players.len());
        for player in players {
            if stats.contains_key(player) {
                continue;
            }
            if let Some(found) = self.get_match_stats(player)? {
                stats.insert(player.clone(), found);
            }
        }
        Ok(stats)
    }

    /// Persist a roster, replacing any team saved under the same name
    pub fn save_roster(&mut self, roster: &Roster) -> Result<()> {
        let players = serde_json::to_string(roster.players())?;
        let now = unix_now();

        // INSERT OR REPLACE assigns a fresh rowid, which keeps list order by latest save
        self.conn.execute(
            "INSERT OR REPLACE INTO teams (name, players, points_used, saved_at)
             VALUES (?, ?, ?, ?)",
            params![roster.name, players, roster.points_used(), now],
        )?;
        debug!(team = %roster.name, players = roster.len(), "saved team");
        Ok(())
    }

    /// Load a saved roster by name
    pub fn load_roster(&self, name: &str) -> Result<Option<Roster>> {
        let summary = self
            .conn
            .query_row(
                "SELECT name, players, points_used, saved_at FROM teams WHERE name = ?",
                params![name],
                row_to_team_summary,
            )
            .optional()?;
        Ok(summary.map(TeamSummary::into_roster))
    }

    /// Delete a saved roster; returns whether a team was removed
    pub fn delete_roster(&mut self, name: &str) -> Result<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM teams WHERE name = ?", params![name])?;
        Ok(rows_affected > 0)
    }

    /// All saved teams, most recently saved first
    pub fn list_rosters(&self) -> Result<Vec<TeamSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, players, points_used, saved_at FROM teams ORDER BY rowid DESC",
        )?;

        let rows = stmt.query_map([], row_to_team_summary)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Clear all data from the database (useful for starting fresh)
    pub fn clear_all(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM teams", [])?;
        self.conn.execute("DELETE FROM match_stats", [])?;
        self.conn.execute("DELETE FROM players", [])?;
        Ok(())
    }
}

impl ListingLookup for PlayerDatabase {
    fn player_listing(&self, name: &str) -> Result<Option<PlayerListing>> {
        self.get_listing(name)
    }
}

impl StatsLookup for PlayerDatabase {
    fn player_stats(&self, name: &str) -> Result<Option<PlayerMatchStats>> {
        self.get_match_stats(name)
    }
}

fn row_to_listing(row: &Row) -> rusqlite::Result<PlayerListing> {
    let category: String = row.get(1)?;
    let category = category
        .parse::<Category>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

    Ok(PlayerListing {
        name: row.get(0)?,
        category,
        value: PointValue::new(row.get(2)?),
    })
}

fn row_to_match_stats(row: &Row) -> rusqlite::Result<PlayerMatchStats> {
    Ok(PlayerMatchStats {
        runs_scored: row.get(0)?,
        balls_faced: row.get(1)?,
        fours: row.get(2)?,
        sixes: row.get(3)?,
        balls_bowled: row.get(4)?,
        maidens: row.get(5)?,
        runs_conceded: row.get(6)?,
        wickets: row.get(7)?,
        catches: row.get(8)?,
        stumpings: row.get(9)?,
        run_outs: row.get(10)?,
    })
}

fn row_to_team_summary(row: &Row) -> rusqlite::Result<TeamSummary> {
    let players: String = row.get(1)?;
    let players: Vec<String> = serde_json::from_str(&players)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

    Ok(TeamSummary {
        name: row.get(0)?,
        players,
        points_used: row.get(2)?,
        saved_at: row.get(3)?,
    })
}
