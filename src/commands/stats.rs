//! Match stats import command

use std::path::Path;

use tracing::warn;

use super::common::CommandContext;
use crate::{
    storage::{PlayerDatabase, StatsRecord},
    Result,
};

/// Read a JSON array of stats records
pub fn load_stats_file(path: &Path) -> Result<Vec<StatsRecord>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Store `records`, warning about players that are not in the pool.
/// Stats for unlisted players are still stored; they simply can't be drafted.
pub fn import_stats(db: &mut PlayerDatabase, records: &[StatsRecord]) -> Result<usize> {
    for record in records {
        if db.get_listing(&record.player)?.is_none() {
            warn!(player = %record.player, "stats for player not in the player pool");
        }
    }
    db.import_match_stats(records)
}

/// Handle the import-stats command
pub fn handle_import_stats(ctx: &mut CommandContext, file: &Path) -> Result<()> {
    let records = load_stats_file(file)?;
    let imported = import_stats(&mut ctx.db, &records)?;
    println!("✓ Imported match stats for {} players", imported);
    Ok(())
}
