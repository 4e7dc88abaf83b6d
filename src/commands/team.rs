//! Team building, persistence, and scoring commands
//!
//! Every mutation goes through [`TeamBudget`] and every save through
//! [`TeamBudget::validate_for_save`], so a team on disk always fits the budget
//! that was in force when it was written.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, info};

use super::common::{print_json, CommandContext};
use crate::{
    cli::TeamCmd,
    roster::{Roster, TeamBudget},
    scoring::{score_team, TeamScore},
    storage::{PlayerDatabase, TeamSummary},
    FantasyError, Result,
};

/// Build a roster from `players`, checking each add against the budget.
pub fn build_roster(
    budget: &TeamBudget,
    db: &PlayerDatabase,
    name: &str,
    players: &[String],
) -> Result<Roster> {
    let mut roster = Roster::new(name);
    for player in players {
        budget.add_listed_player(&mut roster, player, db)?;
    }
    Ok(roster)
}

/// Validate and persist `roster`, returning what was stored.
pub fn persist_roster(budget: &TeamBudget, db: &mut PlayerDatabase, roster: Roster) -> Result<Roster> {
    let roster = budget.validate_for_save(roster, &*db)?;
    db.save_roster(&roster)?;
    info!(team = %roster.name, points_used = roster.points_used(), "team saved");
    Ok(roster)
}

/// Save a team made of `players`, replacing any team with the same name.
pub fn save_team(
    budget: &TeamBudget,
    db: &mut PlayerDatabase,
    name: &str,
    players: &[String],
) -> Result<Roster> {
    let roster = build_roster(budget, db, name, players)?;
    persist_roster(budget, db, roster)
}

/// Load a saved team or report it missing
pub fn load_team(db: &PlayerDatabase, name: &str) -> Result<Roster> {
    db.load_roster(name)?
        .ok_or_else(|| FantasyError::TeamNotFound {
            name: name.to_string(),
        })
}

/// Add one player to a team, starting a new team if none is saved yet.
pub fn add_to_team(
    budget: &TeamBudget,
    db: &mut PlayerDatabase,
    name: &str,
    player: &str,
) -> Result<Roster> {
    let mut roster = match db.load_roster(name)? {
        Some(saved) => budget.reload(saved, &*db)?,
        None => {
            debug!(team = name, "starting new team");
            Roster::new(name)
        }
    };
    budget.add_listed_player(&mut roster, player, &*db)?;
    persist_roster(budget, db, roster)
}

/// Remove one player from a saved team.
pub fn remove_from_team(
    budget: &TeamBudget,
    db: &mut PlayerDatabase,
    name: &str,
    player: &str,
) -> Result<Roster> {
    let mut roster = budget.reload(load_team(db, name)?, &*db)?;
    budget.remove_player(&mut roster, player, &*db)?;
    persist_roster(budget, db, roster)
}

/// Save a copy of a team under a new name.
pub fn copy_team(
    budget: &TeamBudget,
    db: &mut PlayerDatabase,
    from: &str,
    to: &str,
) -> Result<Roster> {
    let roster = load_team(db, from)?.renamed(to);
    persist_roster(budget, db, roster)
}

/// Score one saved team.
pub fn team_score(db: &PlayerDatabase, name: &str) -> Result<TeamScore> {
    let roster = load_team(db, name)?;
    if roster.is_empty() {
        return Err(FantasyError::EmptyRoster);
    }
    score_team(&roster, db)
}

/// Score every saved team, highest total first.
///
/// Stats for all drafted players are loaded once, then teams are scored in
/// parallel against that snapshot.
pub fn leaderboard(db: &PlayerDatabase) -> Result<Vec<TeamScore>> {
    let rosters: Vec<Roster> = db
        .list_rosters()?
        .into_iter()
        .map(TeamSummary::into_roster)
        .collect();

    let drafted: Vec<String> = rosters
        .iter()
        .flat_map(|r| r.players().iter().cloned())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    let stats = db.match_stats_for(&drafted)?;

    let mut scores = rosters
        .par_iter()
        .map(|roster| score_team(roster, &stats))
        .collect::<Result<Vec<_>>>()?;

    scores.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then_with(|| a.team_name.cmp(&b.team_name))
    });
    Ok(scores)
}

fn print_roster(roster: &Roster, budget: &TeamBudget) {
    println!(
        "{} - {} players, {} points used, {} available",
        roster.name,
        roster.len(),
        roster.points_used(),
        budget.remaining(roster)
    );
    for (i, player) in roster.players().iter().enumerate() {
        println!("  {:2}. {}", i + 1, player);
    }
}

fn print_team_score(score: &TeamScore) {
    println!("Team: {}", score.team_name);
    for player in &score.player_scores {
        println!("  {:<28} {:>4}", player.name, player.score);
    }
    println!("  {}", "=".repeat(33));
    println!("  {:<28} {:>4}", "Total Score", score.total_score);
}

/// Handle the team subcommands
pub fn handle_team(ctx: &mut CommandContext, cmd: TeamCmd) -> Result<()> {
    let budget = ctx.budget;
    let db = &mut ctx.db;

    match cmd {
        TeamCmd::Create { name } => {
            let roster = Roster::new(name);
            if roster.name.trim().is_empty() {
                return Err(FantasyError::MissingName);
            }
            if db.load_roster(&roster.name)?.is_some() {
                println!("Team '{}' already exists; saving will replace it", roster.name);
            }
            println!(
                "Team '{}' created with {} points available. Add players with `team add`.",
                roster.name,
                budget.remaining(&roster)
            );
        }

        TeamCmd::Save { name, players } => {
            let roster = save_team(&budget, db, &name, &players)?;
            println!("✓ Team '{}' saved successfully!", roster.name);
            print_roster(&roster, &budget);
        }

        TeamCmd::Add { name, player } => {
            let roster = add_to_team(&budget, db, &name, &player)?;
            println!("✓ Added {} to '{}'", player, roster.name);
            print_roster(&roster, &budget);
        }

        TeamCmd::Remove { name, player } => {
            let roster = remove_from_team(&budget, db, &name, &player)?;
            println!("✓ Removed {} from '{}'", player, roster.name);
            print_roster(&roster, &budget);
        }

        TeamCmd::Copy { from, to } => {
            let roster = copy_team(&budget, db, &from, &to)?;
            println!("✓ Team '{}' saved as '{}'", from, roster.name);
        }

        TeamCmd::Show { name, json } => {
            let roster = load_team(db, &name)?;
            if json {
                print_json(&roster)?;
            } else {
                print_roster(&roster, &budget);
            }
        }

        TeamCmd::List { json } => {
            let teams = db.list_rosters()?;
            if json {
                print_json(&teams)?;
            } else if teams.is_empty() {
                println!("No saved teams");
            } else {
                for team in &teams {
                    println!(
                        "{:<24} {:>2} players {:>3} pts",
                        team.name,
                        team.players.len(),
                        team.points_used
                    );
                }
            }
        }

        TeamCmd::Delete { name } => {
            if !db.delete_roster(&name)? {
                return Err(FantasyError::TeamNotFound { name });
            }
            println!("✓ Team '{}' deleted successfully!", name);
        }

        TeamCmd::Score { name, json } => {
            let score = team_score(db, &name)?;
            if json {
                print_json(&score)?;
            } else {
                print_team_score(&score);
            }
        }

        TeamCmd::Leaderboard { json } => {
            let scores = leaderboard(db)?;
            if json {
                print_json(&scores)?;
            } else if scores.is_empty() {
                println!("No saved teams");
            } else {
                for (rank, score) in scores.iter().enumerate() {
                    println!(
                        "{:2}. {:<24} {:>5} ({} players)",
                        rank + 1,
                        score.team_name,
                        score.total_score,
                        score.player_count
                    );
                }
            }
        }
    }

    Ok(())
}
