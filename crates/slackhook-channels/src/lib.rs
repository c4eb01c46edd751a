//! slackhook channels: message delivery.
//!
//! This crate provides:
//! - **base**: The `Channel` trait that all delivery channels satisfy
//! - **webhook**: `WebhookChannel`: posts messages to a Slack incoming webhook
//! - **stdout**: `StdoutChannel`: prints the JSON body instead of posting it
//! - **error**: `ChannelError`: what a failed delivery reports

pub mod base;
pub mod error;
pub mod stdout;
pub mod webhook;

pub use base::Channel;
pub use error::ChannelError;
pub use stdout::StdoutChannel;
pub use webhook::WebhookChannel;
