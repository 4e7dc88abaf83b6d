//! Database setup command implementation

use tracing::info;

use super::common::CommandContext;
use crate::{storage::PlayerDatabase, Category, Result};

/// Seed the player pool, optionally wiping everything first.
/// Returns how many players were inserted.
pub fn run_setup(db: &mut PlayerDatabase, reset: bool) -> Result<usize> {
    if reset {
        info!("clearing existing players, stats, and teams");
        db.clear_all()?;
    }
    db.seed_default_players()
}

/// Handle the setup command
pub fn handle_setup(ctx: &mut CommandContext, reset: bool) -> Result<()> {
    let inserted = run_setup(&mut ctx.db, reset)?;

    if inserted == 0 {
        println!("Player pool already present, nothing to seed (use --reset to start fresh)");
    } else {
        println!("✓ Added {} players", inserted);
    }

    for category in Category::ALL {
        let players = ctx.db.list_listings(Some(category))?;
        println!("  - {}: {}", category.label(), players.len());
    }

    Ok(())
}
