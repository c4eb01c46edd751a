//! Immutable Block Kit message builder.
//!
//! ```
//! use slackhook_core::{Message, Mrkdwn};
//!
//! let text = Mrkdwn::create().append_text("See ").append_link("http://ci/1", Some("log"));
//! let message = Message::create()
//!     .insert_header("Build Failed")
//!     .insert_divider()
//!     .insert_mrkdwn_text(&text);
//!
//! assert_eq!(message.get().blocks.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::blocks::Block;

/// Alt text used when an image is inserted without one.
pub const DEFAULT_ALT_TEXT: &str = "default alt text";

/// JSON body posted to an incoming webhook.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessagePayload {
    pub blocks: Vec<Block>,
    pub unfurl_links: bool,
    pub unfurl_media: bool,
}

/// A message snapshot.
///
/// Every builder method borrows `self` and returns a new snapshot; the
/// receiver is never modified. Unfurl flags can only be switched on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    payload: MessagePayload,
}

impl Message {
    /// An empty message: no blocks, no unfurling.
    pub fn create() -> Self {
        Self::default()
    }

    fn with_block(&self, block: Block) -> Self {
        let mut blocks = Vec::with_capacity(self.payload.blocks.len() + 1);
        blocks.extend_from_slice(&self.payload.blocks);
        blocks.push(block);
        Self {
            payload: MessagePayload {
                blocks,
                ..self.payload
            },
        }
    }

    /// Insert a header block with plain text.
    pub fn insert_header(&self, text: impl Into<String>) -> Self {
        self.with_block(Block::header(text))
    }

    /// Insert a section of mrkdwn text.
    ///
    /// Accepts plain strings as well as a [`Mrkdwn`](crate::Mrkdwn) value
    /// (owned or borrowed), which is resolved to its text.
    pub fn insert_mrkdwn_text(&self, text: impl Into<String>) -> Self {
        self.with_block(Block::section(text))
    }

    /// Insert a divider line.
    pub fn insert_divider(&self) -> Self {
        self.with_block(Block::divider())
    }

    /// Insert an image. `None` alt text becomes [`DEFAULT_ALT_TEXT`]; an
    /// empty string is kept as given.
    pub fn insert_image(&self, image_url: &str, alt_text: Option<&str>) -> Self {
        self.with_block(Block::image(
            image_url,
            alt_text.unwrap_or(DEFAULT_ALT_TEXT),
        ))
    }

    /// Let Slack expand text links into previews.
    pub fn unfurl_links(&self) -> Self {
        Self {
            payload: MessagePayload {
                unfurl_links: true,
                ..self.payload.clone()
            },
        }
    }

    /// Let Slack expand media links into previews.
    pub fn unfurl_media(&self) -> Self {
        Self {
            payload: MessagePayload {
                unfurl_media: true,
                ..self.payload.clone()
            },
        }
    }

    /// The transport-ready payload.
    pub fn get(&self) -> &MessagePayload {
        &self.payload
    }

    /// Blocks in insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.payload.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.payload.blocks.len()
    }

    /// True when no block has been inserted.
    pub fn is_empty(&self) -> bool {
        self.payload.blocks.is_empty()
    }

    /// Render the webhook body as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.payload)
    }
}

impl From<Message> for MessagePayload {
    fn from(value: Message) -> Self {
        value.payload
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
