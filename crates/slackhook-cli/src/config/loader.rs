//! Config loader: reads `~/.slackhook/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.slackhook/config.json`
//! 3. Environment variables `SLACKHOOK_<FIELD>` (override JSON)
//!
//! Command-line flags are applied on top by the commands themselves.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::schema::Config;

pub const ENV_WEBHOOK_URL: &str = "SLACKHOOK_WEBHOOK_URL";
pub const ENV_TIMEOUT_SECS: &str = "SLACKHOOK_TIMEOUT_SECS";

/// slackhook data directory (e.g. `~/.slackhook/`).
pub fn get_data_path() -> PathBuf {
    dirs_next::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".slackhook")
}

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    get_data_path().join("config.json")
}

/// Load configuration from the default path + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    apply_env_overrides(load_config_from_path(&config_path))
}

/// Load config from a specific file path, without env overrides.
fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            Config::default()
        }
    }
}

/// Read the config file as written, without env overrides.
///
/// A missing file yields `Config::default()`; an unreadable or malformed one
/// is an error rather than a silent fallback, so callers about to rewrite
/// the file never clobber content they could not parse.
pub fn read_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)
        .map_err(std::io::Error::other)?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of a loaded config.
///
/// - `SLACKHOOK_WEBHOOK_URL` → `webhook_url`
/// - `SLACKHOOK_TIMEOUT_SECS` → `timeout_secs` (ignored unless a valid integer)
fn apply_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(val) = lookup(ENV_WEBHOOK_URL) {
        config.webhook_url = Some(val);
    }
    if let Some(val) = lookup(ENV_TIMEOUT_SECS) {
        match val.parse::<u64>() {
            Ok(secs) => config.timeout_secs = secs,
            Err(_) => warn!("Ignoring invalid {}: {}", ENV_TIMEOUT_SECS, val),
        }
    }
    config
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
