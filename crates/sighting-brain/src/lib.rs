//! Wildlife sighting responder for the bot.
//!
//! Implements the bot's commands on top of [`inat_client`]:
//!
//! - `!animal <name>` - resolve the best-matching taxon for a free-text
//!   name, pick a random research-grade observation, reply with an embed
//! - `!deer` - the same, hardcoded for deer
//! - `!taxonhelp <name>` - list taxa matches so users can refine a search
//!
//! The taxon match ranker lives in [`ranker`] and is usable on its own.

mod brain;
mod format;
pub mod ranker;

pub use brain::{SightingBrain, SightingConfig};

// Re-export the seam types for convenience
pub use bot_core::{BotError, InboundMessage, Reply, Responder};
