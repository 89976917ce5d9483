//! The Responder trait definition.

use async_trait::async_trait;

use crate::error::BotError;
use crate::message::{InboundMessage, Reply};

/// A trait for turning inbound chat messages into replies.
///
/// Implementations own whatever lookups their replies need; the chat
/// transport only sees messages in and replies out. This trait is
/// object-safe and can be used with `Box<dyn Responder>`.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Process an inbound message and build a reply.
    ///
    /// Returns `Ok(None)` when the message is not addressed to this
    /// responder (plain chatter, unknown commands) and should be ignored.
    async fn respond(&self, message: InboundMessage) -> Result<Option<Reply>, BotError>;

    /// Get a human-readable name for this responder implementation.
    fn name(&self) -> &str;

    /// A quick acknowledgement to send before the real work starts,
    /// e.g. "Searching...". Must not block or perform I/O.
    ///
    /// Default implementation returns no acknowledgement.
    fn acknowledge(&self, _message: &InboundMessage) -> Option<Reply> {
        None
    }

    /// Check if the responder is ready to process messages.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}
