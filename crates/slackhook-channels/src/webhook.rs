//! Slack incoming-webhook channel.
//!
//! Posts the message body as JSON to a fixed webhook URL. One request per
//! `send`, no retries. The URL is treated as a secret: it is never logged
//! and is redacted from `Debug` output.

use async_trait::async_trait;
use tracing::{debug, error};

use slackhook_core::Message;

use crate::base::Channel;
use crate::error::ChannelError;

// ─────────────────────────────────────────────
// WebhookChannel
// ─────────────────────────────────────────────

/// A channel bound to one incoming-webhook URL.
#[derive(Clone)]
pub struct WebhookChannel {
    /// HTTP client (connection-pooled, cheap to clone).
    http: reqwest::Client,
    /// Webhook URL, e.g. `https://hooks.slack.com/services/T000/B000/XXXX`.
    endpoint: String,
}

impl std::fmt::Debug for WebhookChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookChannel")
            .field("endpoint", &"<redacted>")
            .finish()
    }
}

impl WebhookChannel {
    /// Bind a channel to `endpoint` using a default HTTP client.
    ///
    /// The URL is not validated here; a malformed URL fails on `send`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Bind a channel to `endpoint` using a caller-configured client
    /// (timeouts, proxies, TLS settings).
    pub fn with_client(endpoint: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// The bound webhook URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

// ─────────────────────────────────────────────
// Channel trait implementation
// ─────────────────────────────────────────────

#[async_trait]
impl Channel for WebhookChannel {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn send(&self, message: &Message) -> Result<(), ChannelError> {
        let payload = message.get();

        debug!(
            blocks = payload.blocks.len(),
            unfurl_links = payload.unfurl_links,
            unfurl_media = payload.unfurl_media,
            "Posting message to webhook"
        );

        let resp = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!(error = %e, "webhook request failed");
                ChannelError::Http(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            error!(status = %status, body = %body, "webhook rejected message");
            return Err(ChannelError::Rejected { status, body });
        }

        debug!(status = %status, "webhook accepted message");
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use slackhook_core::Mrkdwn;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const HOOK_PATH: &str = "/services/T000/B000/XXXX";

    fn build_failed() -> Message {
        Message::create()
            .insert_header("Build Failed")
            .insert_divider()
            .insert_mrkdwn_text(
                Mrkdwn::create()
                    .append_text("See ")
                    .append_link("http://ci/1", Some("log")),
            )
    }

    // ── Unit tests ──

    #[test]
    fn test_channel_name() {
        let ch = WebhookChannel::new("https://hooks.slack.com/services/T/B/X");
        assert_eq!(ch.name(), "webhook");
    }

    #[test]
    fn test_endpoint_is_kept_verbatim() {
        let ch = WebhookChannel::new("not a url");
        assert_eq!(ch.endpoint(), "not a url");
    }

    #[test]
    fn test_debug_redacts_endpoint() {
        let ch = WebhookChannel::new("https://hooks.slack.com/services/T/B/secret");
        let dbg = format!("{:?}", ch);
        assert!(!dbg.contains("secret"));
        assert!(dbg.contains("<redacted>"));
    }

    // ── Integration tests with mock server ──

    #[tokio::test]
    async fn test_send_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(HOOK_PATH))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let ch = WebhookChannel::new(format!("{}{}", mock_server.uri(), HOOK_PATH));
        ch.send(&build_failed()).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_posts_exact_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(HOOK_PATH))
            .and(body_json(json!({
                "blocks": [
                    {"type": "header", "text": {"type": "plain_text", "text": "Build Failed"}},
                    {"type": "divider"},
                    {"type": "section", "text": {"type": "mrkdwn", "text": "See <http://ci/1|log>"}}
                ],
                "unfurl_links": false,
                "unfurl_media": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let ch = WebhookChannel::new(format!("{}{}", mock_server.uri(), HOOK_PATH));

        // If the body matcher fails, wiremock returns 404 → Rejected
        ch.send(&build_failed().unfurl_media()).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(HOOK_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid_blocks"))
            .mount(&mock_server)
            .await;

        let ch = WebhookChannel::new(format!("{}{}", mock_server.uri(), HOOK_PATH));
        let err = ch.send(&build_failed()).await.unwrap_err();

        match err {
            ChannelError::Rejected { status, body } => {
                assert_eq!(status.as_u16(), 400);
                assert_eq!(body, "invalid_blocks");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_network_error() {
        // Point to a port that's not listening
        let ch = WebhookChannel::new("http://127.0.0.1:1/services/T/B/X");
        let message = build_failed();
        let before = message.clone();

        let err = ch.send(&message).await.unwrap_err();

        assert!(matches!(err, ChannelError::Http(_)));
        assert_eq!(message, before);
    }

    #[tokio::test]
    async fn test_send_malformed_url() {
        let ch = WebhookChannel::new("not a url");
        let err = ch.send(&Message::create()).await.unwrap_err();
        assert!(matches!(err, ChannelError::Http(_)));
    }

    #[tokio::test]
    async fn test_concurrent_sends_are_independent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(HOOK_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(3)
            .mount(&mock_server)
            .await;

        let ch = WebhookChannel::new(format!("{}{}", mock_server.uri(), HOOK_PATH));
        let a = Message::create().insert_header("a");
        let b = Message::create().insert_header("b");
        let c = Message::create().insert_header("c");

        let (ra, rb, rc) = tokio::join!(ch.send(&a), ch.send(&b), ch.send(&c));
        ra.unwrap();
        rb.unwrap();
        rc.unwrap();
    }
}
