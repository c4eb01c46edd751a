//! Slack `mrkdwn` text builder.
//!
//! Builds section text through chained append calls. Every call borrows the
//! receiver and returns a new `Mrkdwn`, so a partially built value can be
//! reused as a prefix for several messages.
//!
//! Token syntax produced here:
//! - link: `<url|alt>` or the bare `url`
//! - channel: `<#C123>`
//! - user: `<@U123>`
//! - user group: `<!subteam^S123>`
//!
//! Text is appended verbatim. Literal `<`, `>` or `|` in caller text are not
//! escaped and will be rendered as markup by Slack.
//!
//! See <https://api.slack.com/reference/surfaces/formatting>.

use std::fmt;

/// Immutable mrkdwn string builder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mrkdwn {
    text: String,
}

impl Mrkdwn {
    /// Create an empty builder.
    pub fn create() -> Self {
        Self::default()
    }

    fn extended(&self, tail: &str) -> Self {
        let mut text = String::with_capacity(self.text.len() + tail.len());
        text.push_str(&self.text);
        text.push_str(tail);
        Self { text }
    }

    /// Append plain text as-is.
    pub fn append_text(&self, text: &str) -> Self {
        self.extended(text)
    }

    /// Append a link.
    ///
    /// With alt text the link renders as `<url|alt>`. Without it (or with an
    /// empty alt text) the bare URL is appended and Slack auto-links it.
    pub fn append_link(&self, url: &str, alt_text: Option<&str>) -> Self {
        match alt_text {
            Some(alt) if !alt.is_empty() => self.extended(&format!("<{url}|{alt}>")),
            _ => self.extended(url),
        }
    }

    /// Append a line break.
    pub fn append_new_line(&self) -> Self {
        self.extended("\n")
    }

    /// Append a channel mention (`<#C123>`).
    pub fn tag_channel(&self, channel_id: &str) -> Self {
        self.extended(&format!("<#{channel_id}>"))
    }

    /// Append a user mention (`<@U123>`).
    pub fn tag_user(&self, user_id: &str) -> Self {
        self.extended(&format!("<@{user_id}>"))
    }

    /// Append a user group mention (`<!subteam^S123>`).
    pub fn tag_group(&self, group_id: &str) -> Self {
        self.extended(&format!("<!subteam^{group_id}>"))
    }

    /// The accumulated mrkdwn text.
    pub fn get(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Mrkdwn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Mrkdwn {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Mrkdwn> for String {
    fn from(value: Mrkdwn) -> Self {
        value.text
    }
}

impl From<&Mrkdwn> for String {
    fn from(value: &Mrkdwn) -> Self {
        value.text.clone()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
