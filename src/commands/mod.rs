//! Command implementations for the fantasy cricket CLI

pub mod common;
pub mod players;
pub mod setup;
pub mod stats;
pub mod team;


pub use common::CommandContext;

use crate::{cli::Commands, Result};

/// Dispatch a parsed command to its handler
pub fn run(ctx: &mut CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::Setup { reset } => setup::handle_setup(ctx, reset),
        Commands::Players { category, json } => players::handle_players(ctx, category, json),
        Commands::Player { name, json } => players::handle_player(ctx, &name, json),
        Commands::ImportStats { file } => stats::handle_import_stats(ctx, &file),
        Commands::Team { cmd } => team::handle_team(ctx, cmd),
    }
}
