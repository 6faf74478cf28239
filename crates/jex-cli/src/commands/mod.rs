//! Subcommand implementations.

pub mod activate;
pub mod export;
pub mod status;
