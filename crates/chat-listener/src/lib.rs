//! Connects a chat transport to a [`Responder`] implementation.
//!
//! The chat platform itself is a collaborator: transports implement
//! [`ChatClient`] for delivery and hand the processor a stream of
//! [`InboundMessage`]s. Connection lifecycle, authentication, and platform
//! intents all stay on the transport's side of the seam.
//!
//! # Example
//!
//! ```no_run
//! use chat_listener::{ChatClient, ChatError, MessageProcessor, ProcessorConfig};
//! use bot_core::{async_trait, InboundMessage, Reply};
//! use sighting_brain::SightingBrain;
//! use inat_client::InatClient;
//! use futures::stream;
//!
//! struct StdoutChat;
//!
//! #[async_trait]
//! impl ChatClient for StdoutChat {
//!     async fn send(&self, reply: &Reply) -> Result<(), ChatError> {
//!         println!("{:?}", reply);
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let brain = SightingBrain::with_defaults(InatClient::from_env()?);
//! let processor = MessageProcessor::with_defaults(StdoutChat, brain);
//!
//! let messages = stream::iter(vec![
//!     InboundMessage::direct("user-1", "!animal goat", 0),
//! ]);
//! processor.run(messages).await?;
//! # Ok(())
//! # }
//! ```

mod processor;

use async_trait::async_trait;
use bot_core::Reply;
use thiserror::Error;

pub use processor::{MessageProcessor, ProcessResult, ProcessorConfig, ProcessorError};

// Re-export the seam types for users
pub use bot_core::{InboundMessage, Responder};

/// Error delivering a reply through a chat transport.
#[derive(Debug, Error)]
#[error("chat send failed: {0}")]
pub struct ChatError(pub String);

/// A handle to a chat platform that can deliver replies.
///
/// Implementations are passed in explicitly; nothing in this crate holds a
/// global connection.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Deliver a reply to its channel.
    async fn send(&self, reply: &Reply) -> Result<(), ChatError>;
}

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
