//! Player listing and player detail commands

use serde::Serialize;

use super::common::{print_json, CommandContext};
use crate::{
    roster::PlayerListing,
    scoring::{breakdown, PlayerMatchStats, ScoreBreakdown},
    storage::PlayerDatabase,
    Category, FantasyError, Result,
};

/// Everything known about one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerReport {
    pub listing: PlayerListing,
    pub stats: Option<PlayerMatchStats>,
    pub breakdown: ScoreBreakdown,
    pub score: u32,
}

/// Build the report for `name`; players without stats score zero.
pub fn player_report(db: &PlayerDatabase, name: &str) -> Result<PlayerReport> {
    let listing = db
        .get_listing(name)?
        .ok_or_else(|| FantasyError::UnknownPlayer {
            name: name.to_string(),
        })?;
    let stats = db.get_match_stats(name)?;
    let terms = stats.as_ref().map(breakdown).unwrap_or_default();

    Ok(PlayerReport {
        listing,
        stats,
        score: terms.total(),
        breakdown: terms,
    })
}

/// Handle the players command
pub fn handle_players(ctx: &CommandContext, category: Option<Category>, as_json: bool) -> Result<()> {
    let listings = ctx.db.list_listings(category)?;

    if as_json {
        return print_json(&listings);
    }

    if listings.is_empty() {
        println!("No players found (run `fantasy-cricket setup` first)");
        return Ok(());
    }

    for listing in &listings {
        println!(
            "{:<4} {:<28} {:>2} pts",
            listing.category.code(),
            listing.name,
            listing.value
        );
    }
    Ok(())
}

/// Handle the player command
pub fn handle_player(ctx: &CommandContext, name: &str, as_json: bool) -> Result<()> {
    let report = player_report(&ctx.db, name)?;

    if as_json {
        return print_json(&report);
    }

    println!(
        "{} ({}) - {} pts",
        report.listing.name,
        report.listing.category.label(),
        report.listing.value
    );

    if report.stats.is_none() {
        println!("No match stats recorded; score 0");
        return Ok(());
    }

    let b = &report.breakdown;
    let lines = [
        ("Batting", b.batting),
        ("Run milestone", b.milestone),
        ("Strike rate", b.strike_rate),
        ("Boundaries", b.boundaries),
        ("Wickets", b.wickets),
        ("Wicket milestone", b.wicket_milestone),
        ("Economy", b.economy),
        ("Fielding", b.fielding),
    ];
    for (label, points) in lines {
        println!("  {:<18} {:>4}", label, points);
    }
    println!("  {:<18} {:>4}", "Total", report.score);
    Ok(())
}
