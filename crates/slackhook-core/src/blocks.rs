//! Block Kit layout blocks supported by incoming webhooks.
//!
//! Only the four block kinds this crate builds are modelled. Serialization
//! matches Slack's JSON exactly, e.g. a divider is `{"type":"divider"}`.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Text objects
// ─────────────────────────────────────────────

/// How Slack renders a text object.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TextObjectType {
    #[serde(rename = "plain_text")]
    PlainText,
    #[serde(rename = "mrkdwn")]
    Markdown,
}

/// A composition text object (`{"type": "...", "text": "..."}`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub ty: TextObjectType,
    pub text: String,
}

impl TextObject {
    /// Text rendered verbatim.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            ty: TextObjectType::PlainText,
            text: text.into(),
        }
    }

    /// Text rendered as mrkdwn.
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            ty: TextObjectType::Markdown,
            text: text.into(),
        }
    }
}

// ─────────────────────────────────────────────
// Blocks
// ─────────────────────────────────────────────

/// A single renderable unit of a message.
///
/// Tagged by `type` on the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Large bold heading. Text is always `plain_text`.
    Header { text: TextObject },

    /// Body text. Text is always `mrkdwn`.
    Section { text: TextObject },

    /// Horizontal rule.
    Divider,

    Image { image_url: String, alt_text: String },
}

impl Block {
    /// Header block; `text` becomes a `plain_text` object.
    pub fn header(text: impl Into<String>) -> Self {
        Block::Header {
            text: TextObject::plain(text),
        }
    }

    /// Section block; `text` becomes a `mrkdwn` object.
    pub fn section(text: impl Into<String>) -> Self {
        Block::Section {
            text: TextObject::markdown(text),
        }
    }

    /// Divider block.
    pub fn divider() -> Self {
        Block::Divider
    }

    /// Image block. `alt_text` is used as given.
    pub fn image(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Block::Image {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }

    /// Wire name of this block kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Header { .. } => "header",
            Block::Section { .. } => "section",
            Block::Divider => "divider",
            Block::Image { .. } => "image",
        }
    }
}
