//! ChemKED CLI - convert and validate kinetics experiment records.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            file_author,
            file_author_orcid,
            offline,
        } => commands::convert::run(input, output, file_author, file_author_orcid, offline),

        Commands::Validate { file } => commands::validate::run(file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
