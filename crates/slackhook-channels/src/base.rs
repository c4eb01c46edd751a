//! Channel trait: the abstract interface every delivery channel implements.
//!
//! A channel is bound to one destination when it is constructed and can
//! then deliver any number of finished messages to it:
//! - `name()`: short identifier used in logs
//! - `send()`: deliver one message, resolving once delivery completes

use async_trait::async_trait;
use slackhook_core::Message;

use crate::error::ChannelError;

/// Every delivery channel implements this trait.
///
/// Implementations hold no per-message state, so one channel can be shared
/// across tasks and used for concurrent sends.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Channel kind (e.g. "webhook").
    fn name(&self) -> &str;

    /// Deliver a message.
    ///
    /// Makes a single attempt. Any transport failure or rejection by the
    /// receiving service is returned as-is; the message is only borrowed.
    async fn send(&self, message: &Message) -> Result<(), ChannelError>;
}
