//! Core trait and types for wildlife bot responder implementations.
//!
//! This crate provides the shared interface between chat transports and
//! the bot logic. It defines:
//!
//! - [`Responder`] - The trait that bot implementations must implement
//! - [`InboundMessage`] / [`Reply`] / [`Embed`] - Message types for input/output
//! - [`Command`] - The `!`-prefixed command grammar
//! - [`BotError`] - Error types for responder operations
//!
//! # Example
//!
//! ```rust
//! use bot_core::{async_trait, BotError, InboundMessage, Reply, Responder};
//!
//! struct MyBot;
//!
//! #[async_trait]
//! impl Responder for MyBot {
//!     async fn respond(&self, message: InboundMessage) -> Result<Option<Reply>, BotError> {
//!         Ok(Some(Reply::text_to(&message, "Hello!")))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyBot"
//!     }
//! }
//! ```

mod command;
mod error;
mod message;
mod trait_def;

pub use command::Command;
pub use error::BotError;
pub use message::{Embed, EmbedField, InboundMessage, Reply};
pub use trait_def::Responder;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
