//! Configuration schema.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.

use serde::{Deserialize, Serialize};

/// Default HTTP timeout for webhook requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Root configuration: loaded from `~/.slackhook/config.json` + env vars.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Incoming webhook URL. Unset until onboarding or an env override.
    pub webhook_url: Option<String>,
    /// Request timeout handed to the HTTP client.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// The configured webhook URL, if set and non-empty.
    pub fn webhook(&self) -> Option<&str> {
        self.webhook_url.as_deref().filter(|u| !u.is_empty())
    }
}
