//! Printing channel: writes the webhook body to stdout.
//!
//! Used for dry runs; nothing leaves the process.

use async_trait::async_trait;
use tracing::debug;

use slackhook_core::Message;

use crate::base::Channel;
use crate::error::ChannelError;

/// A channel that prints the pretty JSON body it would have posted.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutChannel;

impl StdoutChannel {
    pub fn new() -> Self {
        Self
    }

    /// The exact text `send` prints.
    pub fn render(&self, message: &Message) -> Result<String, ChannelError> {
        Ok(message.to_json()?)
    }
}

#[async_trait]
impl Channel for StdoutChannel {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn send(&self, message: &Message) -> Result<(), ChannelError> {
        let body = self.render(message)?;
        debug!(blocks = message.len(), "printing message");
        println!("{}", body);
        Ok(())
    }
}
