//! `slackhook status`: show configuration status.

use anyhow::Result;
use colored::Colorize;

use crate::config::{get_config_path, load_config};
use crate::helpers::redact_webhook;

/// Run the status command.
pub fn run() -> Result<()> {
    let config_path = get_config_path();
    let config = load_config(Some(&config_path));

    println!();
    println!("{}", "slackhook Status".cyan().bold());
    println!();

    println!(
        "  {:<12} {} {}",
        "Config:".bold(),
        config_path.display(),
        if config_path.exists() {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );

    let webhook = match config.webhook() {
        Some(url) => redact_webhook(url),
        None => "not configured".dimmed().to_string(),
    };
    println!("  {:<12} {}", "Webhook:".bold(), webhook);

    println!(
        "  {:<12} {}",
        "Timeout:".bold(),
        format!("{}s", config.timeout_secs).dimmed()
    );

    println!();
    Ok(())
}
