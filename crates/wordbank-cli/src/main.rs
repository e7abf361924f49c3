//! Wordbank CLI - repair, flatten and check vocabulary data files.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Normalize {
            file,
            output,
            prefix,
            indent,
        } => commands::normalize::run(file, output, prefix, indent, cli.verbose),

        Commands::Check {
            file,
            prefix,
            max_len,
            json,
        } => commands::check::run(file, prefix, max_len, json, cli.verbose),

        Commands::Bundle { sources, output } => {
            commands::bundle::run(sources, output, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
