//! Error types for responder operations.

use thiserror::Error;

/// Errors that can occur while building a reply.
///
/// The first three variants are the user-visible outcomes: responders
/// render them as friendly reply text rather than letting them escape
/// the processing loop.
#[derive(Debug, Error)]
pub enum BotError {
    /// The taxon search returned no usable candidate.
    #[error("no taxon matched '{query}'")]
    NoTaxonMatch { query: String },

    /// The resolved taxon has no observations with photos.
    #[error("no observations found for '{query}'")]
    NoObservations { query: String },

    /// The provider could not be reached or answered with an error.
    /// Transient and permanent failures are reported uniformly.
    #[error("provider error: {0}")]
    Provider(String),

    /// A command that requires a name was invoked without one.
    #[error("empty query")]
    EmptyQuery,
}
