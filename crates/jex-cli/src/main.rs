//! jex - CLI tool for exporting Jike posts to CSV.
//!
//! This is a thin wrapper over the `jex-http` library: it reads the
//! username and session token from the command line, runs one crawl,
//! and saves the rendered CSV next to the caller.

mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Export(args) => commands::export::run(args).await,
        Commands::Activate(args) => commands::activate::run(args),
        Commands::Status(args) => commands::status::run(args),
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
