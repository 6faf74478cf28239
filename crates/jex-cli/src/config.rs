//! Persisted activation state.
//!
//! A single JSON file in the platform config directory, durable across
//! runs. The only thing stored today is the activation flag gating the
//! free-tier export cap.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Stored configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// True once a valid activation code has been entered; lifts the
    /// 60-record export cap.
    #[serde(default)]
    pub activated: bool,
}

/// Get the config file path, creating the directory if needed.
fn config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "jex").context("Could not determine config directory")?;

    let dir = dirs.config_dir();
    fs::create_dir_all(dir).context("Failed to create config directory")?;

    Ok(dir.join("config.json"))
}

/// Load the stored configuration, defaulting when none exists.
pub fn load() -> Result<Config> {
    read_config(&config_path()?)
}

/// Persist the configuration.
pub fn save(config: &Config) -> Result<()> {
    write_config(&config_path()?, config)
}

fn read_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let json = fs::read_to_string(path).context("Failed to read config file")?;
    serde_json::from_str(&json).context("Invalid config file")
}

fn write_config(path: &Path, config: &Config) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).context("Failed to write config file")
}
