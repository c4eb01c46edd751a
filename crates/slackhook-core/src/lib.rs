//! slackhook core: Block Kit message builders.
//!
//! This crate provides:
//! - **mrkdwn**: `Mrkdwn`, a chainable builder for Slack's mrkdwn text
//! - **blocks**: the `Block` kinds an incoming webhook message is made of
//! - **message**: `Message`, a chainable builder producing the webhook body
//!
//! All builders are immutable values; sending lives in `slackhook-channels`.

pub mod blocks;
pub mod message;
pub mod mrkdwn;

pub use blocks::{Block, TextObject, TextObjectType};
pub use message::{Message, MessagePayload, DEFAULT_ALT_TEXT};
pub use mrkdwn::Mrkdwn;
