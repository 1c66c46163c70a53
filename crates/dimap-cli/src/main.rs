//! dimap CLI: the `dimap` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "dimap=warn";

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            world,
            profile,
            laws,
            max_samples,
            json,
        } => commands::check::run(commands::check::Args {
            world: world.map(Into::into),
            profile,
            laws,
            max_samples,
            json,
        }),

        Commands::Laws { json } => commands::laws::run(json),

        Commands::Worlds { json } => commands::worlds::run(json),
    }
}

/// Logs go to stderr so `--json` output stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
