//! slackhook CLI: entry point.
//!
//! # Commands
//!
//! - `slackhook send [--header T] [--text T]... [--image URL] ...`: post a message
//! - `slackhook onboard [--webhook URL]`: create the config file
//! - `slackhook status`: show configuration status

mod config;
mod helpers;
mod onboard;
mod send_cmd;
mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Post Block Kit messages to a Slack incoming webhook
#[derive(Parser)]
#[command(name = "slackhook", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a message from flags and send it
    Send(send_cmd::SendArgs),

    /// Create the config file
    Onboard {
        /// Webhook URL to store
        #[arg(short, long)]
        webhook: Option<String>,
    },

    /// Show configuration status
    Status,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Send(args) => {
            init_logging(args.logs);
            send_cmd::run(args).await
        }
        Commands::Onboard { webhook } => onboard::run(webhook),
        Commands::Status => status::run(),
    }
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("slackhook=debug,slackhook_channels=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
