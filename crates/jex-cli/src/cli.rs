//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::activate::ActivateArgs;
use crate::commands::export::ExportArgs;
use crate::commands::status::StatusArgs;

/// Jike post exporter.
#[derive(Parser, Debug)]
#[command(name = "jex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a profile and save its posts as a CSV file
    Export(ExportArgs),

    /// Unlock the full export with an activation code
    Activate(ActivateArgs),

    /// Show the stored activation state
    Status(StatusArgs),
}
