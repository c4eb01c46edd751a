//! `slackhook send`: build a message from flags and post it.
//!
//! Blocks are assembled in a fixed order: header, divider, one section per
//! `--text`, a mention/link section, image.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use tracing::info;

use slackhook_channels::{Channel, StdoutChannel, WebhookChannel};
use slackhook_core::{Message, Mrkdwn};

use crate::config::{load_config, Config};

/// Arguments for `slackhook send`.
#[derive(Args, Debug, Default)]
pub struct SendArgs {
    /// Webhook URL (overrides config and SLACKHOOK_WEBHOOK_URL)
    #[arg(short, long)]
    pub webhook: Option<String>,

    /// Header text
    #[arg(long)]
    pub header: Option<String>,

    /// Insert a divider after the header
    #[arg(long, default_value_t = false)]
    pub divider: bool,

    /// mrkdwn section text (repeatable, one section each)
    #[arg(short, long)]
    pub text: Vec<String>,

    /// User ID to mention (repeatable)
    #[arg(long = "mention")]
    pub mentions: Vec<String>,

    /// Link appended after the mentions
    #[arg(long)]
    pub link: Option<String>,

    /// Display text for --link
    #[arg(long, requires = "link")]
    pub link_text: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Alt text for --image
    #[arg(long, requires = "image")]
    pub alt_text: Option<String>,

    /// Let Slack unfurl text links
    #[arg(long, default_value_t = false)]
    pub unfurl_links: bool,

    /// Let Slack unfurl media links
    #[arg(long, default_value_t = false)]
    pub unfurl_media: bool,

    /// Print the JSON body instead of posting it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub logs: bool,
}

/// Assemble the message described by `args`.
pub fn build_message(args: &SendArgs) -> Message {
    let mut message = Message::create();

    if let Some(header) = &args.header {
        message = message.insert_header(header.as_str());
    }
    if args.divider {
        message = message.insert_divider();
    }
    for text in &args.text {
        message = message.insert_mrkdwn_text(text.as_str());
    }
    if let Some(footer) = footer_text(args) {
        message = message.insert_mrkdwn_text(footer);
    }
    if let Some(image) = &args.image {
        message = message.insert_image(image, args.alt_text.as_deref());
    }
    if args.unfurl_links {
        message = message.unfurl_links();
    }
    if args.unfurl_media {
        message = message.unfurl_media();
    }

    message
}

/// Mentions separated by spaces, then the link on its own line.
fn footer_text(args: &SendArgs) -> Option<Mrkdwn> {
    if args.mentions.is_empty() && args.link.is_none() {
        return None;
    }

    let mut text = Mrkdwn::create();
    for (i, user) in args.mentions.iter().enumerate() {
        if i > 0 {
            text = text.append_text(" ");
        }
        text = text.tag_user(user);
    }
    if let Some(link) = &args.link {
        if !args.mentions.is_empty() {
            text = text.append_new_line();
        }
        text = text.append_link(link, args.link_text.as_deref());
    }
    Some(text)
}

/// Resolve the webhook URL: flag, then env/config.
fn resolve_webhook(flag: Option<&str>, config: &Config) -> Result<String> {
    if let Some(url) = flag.filter(|u| !u.is_empty()) {
        return Ok(url.to_string());
    }
    match config.webhook() {
        Some(url) => Ok(url.to_string()),
        None => bail!(
            "no webhook URL: pass --webhook, set SLACKHOOK_WEBHOOK_URL, or run `slackhook onboard`"
        ),
    }
}

/// Deliver through any channel, adding context to failures.
async fn deliver(channel: &dyn Channel, message: &Message) -> Result<()> {
    info!(channel = channel.name(), blocks = message.len(), "sending message");
    channel
        .send(message)
        .await
        .with_context(|| format!("failed to send message via {}", channel.name()))
}

/// Run the send command.
pub async fn run(args: SendArgs) -> Result<()> {
    let message = build_message(&args);
    if message.is_empty() {
        bail!("nothing to send: add --header, --text, --divider, --mention, --link or --image");
    }

    if args.dry_run {
        return deliver(&StdoutChannel::new(), &message).await;
    }

    let config = load_config(None);
    let webhook = resolve_webhook(args.webhook.as_deref(), &config)?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("failed to build HTTP client")?;
    let channel = WebhookChannel::with_client(webhook, http);

    deliver(&channel, &message).await?;

    println!(
        "  {} sent {} block(s)",
        "✓".green(),
        message.len()
    );
    Ok(())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use slackhook_core::Block;

    #[test]
    fn test_build_empty() {
        assert!(build_message(&SendArgs::default()).is_empty());
    }

    #[test]
    fn test_build_fixed_order() {
        let args = SendArgs {
            header: Some("Deploy".into()),
            divider: true,
            text: vec!["one".into(), "two".into()],
            image: Some("http://img/x.png".into()),
            unfurl_media: true,
            ..SendArgs::default()
        };
        let message = build_message(&args);

        assert_eq!(
            message.blocks(),
            &[
                Block::header("Deploy"),
                Block::divider(),
                Block::section("one"),
                Block::section("two"),
                Block::image("http://img/x.png", "default alt text"),
            ]
        );
        assert!(message.get().unfurl_media);
        assert!(!message.get().unfurl_links);
    }

    #[test]
    fn test_footer_mentions_and_link() {
        let args = SendArgs {
            mentions: vec!["U1".into(), "U2".into()],
            link: Some("http://ci/7".into()),
            link_text: Some("run 7".into()),
            ..SendArgs::default()
        };
        let message = build_message(&args);
        assert_eq!(
            message.blocks(),
            &[Block::section("<@U1> <@U2>\n<http://ci/7|run 7>")]
        );
    }

    #[test]
    fn test_footer_bare_link() {
        let args = SendArgs {
            link: Some("http://ci/7".into()),
            ..SendArgs::default()
        };
        assert_eq!(
            build_message(&args).blocks(),
            &[Block::section("http://ci/7")]
        );
    }

    #[test]
    fn test_resolve_webhook_flag_wins() {
        let config = Config {
            webhook_url: Some("https://hooks/config".into()),
            ..Config::default()
        };
        let url = resolve_webhook(Some("https://hooks/flag"), &config).unwrap();
        assert_eq!(url, "https://hooks/flag");
    }

    #[test]
    fn test_resolve_webhook_from_config() {
        let config = Config {
            webhook_url: Some("https://hooks/config".into()),
            ..Config::default()
        };
        assert_eq!(resolve_webhook(None, &config).unwrap(), "https://hooks/config");
    }

    #[test]
    fn test_resolve_webhook_missing() {
        let err = resolve_webhook(None, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("no webhook URL"));
    }

    #[tokio::test]
    async fn test_deliver_adds_context() {
        let channel = WebhookChannel::new("http://127.0.0.1:1/hook");
        let message = Message::create().insert_divider();
        let err = deliver(&channel, &message).await.unwrap_err();
        assert!(err.to_string().contains("failed to send message via webhook"));
    }

    #[tokio::test]
    async fn test_dry_run_needs_no_webhook() {
        let args = SendArgs {
            header: Some("Deploy".into()),
            dry_run: true,
            ..SendArgs::default()
        };
        run(args).await.unwrap();
    }

    #[tokio::test]
    async fn test_dry_run_still_refuses_empty() {
        let args = SendArgs {
            dry_run: true,
            ..SendArgs::default()
        };
        let err = run(args).await.unwrap_err();
        assert!(err.to_string().contains("nothing to send"));
    }
}
