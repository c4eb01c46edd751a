//! `slackhook onboard`: create the config file.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{get_config_path, load_config, read_config_file, save_config, Config};
use crate::helpers::redact_webhook;

/// What onboarding did to the config file.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Kept,
    Created,
    Updated,
}

/// Run the onboard command.
///
/// An existing config is kept; `--webhook` updates its URL.
pub fn run(webhook: Option<String>) -> Result<()> {
    println!();
    println!("{}", "slackhook setup".cyan().bold());
    println!();

    let config_path = get_config_path();
    let (outcome, config) = onboard_at(&config_path, webhook)?;

    let verb = match outcome {
        Outcome::Kept => "config already exists at",
        Outcome::Created => "created config at",
        Outcome::Updated => "updated config at",
    };
    println!("  {} {} {}", "✓".green(), verb, config_path.display());

    match config.webhook() {
        Some(url) => println!("  {} webhook {}", "✓".green(), redact_webhook(url)),
        None => println!(
            "  {} no webhook yet, edit {} or set SLACKHOOK_WEBHOOK_URL",
            "!".yellow(),
            config_path.display()
        ),
    }

    println!();
    Ok(())
}

/// Create or update the config file at `path`.
///
/// Writes only what the file already holds plus `webhook`; env overrides are
/// never persisted. A file that does not parse is left untouched.
fn onboard_at(path: &Path, webhook: Option<String>) -> Result<(Outcome, Config)> {
    let existed = path.exists();

    if existed && webhook.is_none() {
        return Ok((Outcome::Kept, load_config(Some(path))));
    }

    let mut config = read_config_file(path).context("refusing to overwrite config")?;
    if let Some(url) = webhook {
        config.webhook_url = Some(url);
    }
    save_config(&config, Some(path))
        .with_context(|| format!("failed to write {}", path.display()))?;

    let outcome = if existed {
        Outcome::Updated
    } else {
        Outcome::Created
    };
    Ok((outcome, config))
}
