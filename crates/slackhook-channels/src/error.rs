//! Errors surfaced by [`Channel::send`](crate::Channel::send).

use reqwest::StatusCode;

/// Failure to deliver a message.
///
/// Nothing is retried; the caller decides what to do with the failure.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The request never produced a response (DNS, connect, TLS, timeout, ...).
    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    ///
    /// Slack puts a short reason in the body, e.g. `invalid_blocks` or
    /// `no_service`.
    #[error("webhook rejected message: {status} {body}")]
    Rejected { status: StatusCode, body: String },

    /// The message could not be rendered to JSON.
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ChannelError {
    /// HTTP status of a rejected request, if there was a response at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ChannelError::Http(e) => e.status(),
            ChannelError::Rejected { status, .. } => Some(*status),
            ChannelError::Encode(_) => None,
        }
    }
}
