//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fantasy_cricket::{
    cli::FantasyCricket,
    commands::{self, CommandContext},
    FantasyError,
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(app: FantasyCricket) -> anyhow::Result<()> {
    let mut ctx = CommandContext::open(app.db).context("startup failed")?;
    commands::run(&mut ctx, app.command)?;
    Ok(())
}

/// Run the CLI.
fn main() {
    let app = FantasyCricket::parse();
    init_logging(app.verbose);

    if let Err(err) = run(app) {
        let code = err
            .downcast_ref::<FantasyError>()
            .map(FantasyError::exit_code)
            .unwrap_or(1);
        eprintln!("Error: {:#}", err);
        std::process::exit(code);
    }
}
