//! SightingBrain implementation over the iNaturalist API.

use async_trait::async_trait;
use bot_core::{BotError, Command, InboundMessage, Reply, Responder};
use inat_client::{InatClient, Observation, Taxon};
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::format;
use crate::ranker;

/// Configuration for [`SightingBrain`].
#[derive(Debug, Clone)]
pub struct SightingConfig {
    /// Command prefix the brain answers to.
    pub command_prefix: String,

    /// Candidate pool size for taxon resolution.
    pub search_limit: usize,

    /// Result count shown by `!taxonhelp`.
    pub taxonhelp_limit: usize,
}

impl Default for SightingConfig {
    fn default() -> Self {
        Self {
            command_prefix: "!".to_string(),
            search_limit: 20,
            taxonhelp_limit: 10,
        }
    }
}

impl SightingConfig {
    /// Create a config with a custom command prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
            ..Default::default()
        }
    }
}

/// A responder that answers wildlife commands with iNaturalist data.
///
/// Holds a shared API client handle; processing is stateless per command,
/// so one brain can serve any number of concurrent commands.
pub struct SightingBrain {
    client: InatClient,
    config: SightingConfig,
}

impl SightingBrain {
    /// Create a new brain over an explicitly constructed client handle.
    pub fn new(client: InatClient, config: SightingConfig) -> Self {
        info!(
            "SightingBrain initialized (prefix: '{}', search limit: {})",
            config.command_prefix, config.search_limit
        );
        Self { client, config }
    }

    /// Create a brain with default configuration.
    pub fn with_defaults(client: InatClient) -> Self {
        Self::new(client, SightingConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &SightingConfig {
        &self.config
    }

    /// Resolve the best-matching taxon for a free-text animal name.
    async fn resolve_taxon(&self, query: &str) -> Result<Taxon, BotError> {
        let candidates = self
            .client
            .search_taxa(query, self.config.search_limit)
            .await
            .map_err(|e| BotError::Provider(e.to_string()))?;

        let best = ranker::best_match(query, &candidates).ok_or_else(|| BotError::NoTaxonMatch {
            query: query.to_string(),
        })?;

        debug!(
            "Resolved '{}' to taxon {} ({}, {:?})",
            query, best.id, best.name, best.preferred_common_name
        );

        Ok(best.clone())
    }

    /// Pick a random observation from the taxon's pool.
    async fn pick_observation(&self, taxon: &Taxon, query: &str) -> Result<Observation, BotError> {
        let pool = self
            .client
            .observations_for_taxon(taxon.id)
            .await
            .map_err(|e| BotError::Provider(e.to_string()))?;

        pool.choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| BotError::NoObservations {
                query: query.to_string(),
            })
    }

    /// Full resolve-then-fetch flow for one animal name.
    async fn random_sighting(&self, query: &str) -> Result<(Taxon, Observation), BotError> {
        let taxon = self.resolve_taxon(query).await?;
        let observation = self.pick_observation(&taxon, query).await?;
        Ok((taxon, observation))
    }

    async fn animal_reply(&self, message: &InboundMessage, query: &str) -> Reply {
        match self.random_sighting(query).await {
            Ok((taxon, observation)) => Reply::embed_to(
                message,
                format::sighting_embed(&observation, &taxon, query, &self.config.command_prefix),
            ),
            Err(e) => {
                warn!("Sighting lookup for '{}' failed: {}", query, e);
                Reply::text_to(message, animal_failure_text(query, &e, &self.config.command_prefix))
            }
        }
    }

    async fn deer_reply(&self, message: &InboundMessage) -> Reply {
        match self.random_sighting("deer").await {
            Ok((_, observation)) => Reply::embed_to(message, format::deer_embed(&observation)),
            Err(e) => {
                warn!("Deer lookup failed: {}", e);
                Reply::text_to(message, deer_failure_text(&e))
            }
        }
    }

    async fn taxonhelp_reply(&self, message: &InboundMessage, query: &str) -> Reply {
        let taxa = match self
            .client
            .search_taxa(query, self.config.taxonhelp_limit)
            .await
        {
            Ok(taxa) => taxa,
            Err(e) => {
                warn!("Taxonomy search for '{}' failed: {}", query, e);
                return Reply::text_to(message, PROVIDER_FAILURE_TEXT);
            }
        };

        if taxa.is_empty() {
            return Reply::text_to(
                message,
                format!("No taxa found for '{query}'. Try checking your spelling."),
            );
        }

        Reply::embed_to(
            message,
            format::taxonhelp_embed(query, &taxa, &self.config.command_prefix),
        )
    }
}

#[async_trait]
impl Responder for SightingBrain {
    async fn respond(&self, message: InboundMessage) -> Result<Option<Reply>, BotError> {
        let Some(command) = Command::parse(&message.text, &self.config.command_prefix) else {
            return Ok(None);
        };

        debug!("Processing {:?} from {}", command, message.sender);

        let reply = match &command {
            Command::Animal { query } => {
                let query = query.trim();
                if query.is_empty() {
                    usage_reply(&message, &command, &self.config.command_prefix)
                } else {
                    self.animal_reply(&message, query).await
                }
            }
            Command::Deer => self.deer_reply(&message).await,
            Command::TaxonHelp { query } => {
                let query = query.trim();
                if query.is_empty() {
                    usage_reply(&message, &command, &self.config.command_prefix)
                } else {
                    self.taxonhelp_reply(&message, query).await
                }
            }
        };

        Ok(Some(reply))
    }

    fn name(&self) -> &str {
        "SightingBrain"
    }

    fn acknowledge(&self, message: &InboundMessage) -> Option<Reply> {
        let command = Command::parse(&message.text, &self.config.command_prefix)?;
        let text = match &command {
            Command::Animal { query } if !query.trim().is_empty() => {
                format!("\u{1F50D} On it! Searching for {} sightings...", query.trim())
            }
            Command::Deer => "\u{1F98C} Searching the forests for a deer...".to_string(),
            Command::TaxonHelp { query } if !query.trim().is_empty() => {
                format!("\u{1F50D} On it! Searching taxonomy for '{}'...", query.trim())
            }
            // Blank queries get a usage reply from respond(), no ack.
            _ => return None,
        };
        Some(Reply::text_to(message, text))
    }
}

const PROVIDER_FAILURE_TEXT: &str =
    "Sorry, iNaturalist isn't responding right now. Please try again later.";

fn usage_reply(message: &InboundMessage, command: &Command, prefix: &str) -> Reply {
    let usage = command
        .usage(prefix)
        .unwrap_or_else(|| format!("Usage: {prefix}animal <animal name>"));
    Reply::text_to(message, usage)
}

fn animal_failure_text(query: &str, error: &BotError, prefix: &str) -> String {
    match error {
        BotError::NoTaxonMatch { .. } => format!(
            "Sorry, couldn't find any animal matching '{query}' in the database. \
             Try {prefix}taxonhelp {query} for suggestions."
        ),
        BotError::NoObservations { .. } => format!(
            "Sorry, couldn't find any {query} observations. \
             Check your spelling or try {prefix}taxonhelp {query}."
        ),
        BotError::Provider(_) | BotError::EmptyQuery => PROVIDER_FAILURE_TEXT.to_string(),
    }
}

fn deer_failure_text(error: &BotError) -> String {
    match error {
        BotError::NoTaxonMatch { .. } => {
            "Sorry, I couldn't find any deer in the forest! Please try again later.".to_string()
        }
        BotError::NoObservations { .. } => {
            "Sorry, I think the deer are really good at hiding. Try again later!".to_string()
        }
        BotError::Provider(_) | BotError::EmptyQuery => PROVIDER_FAILURE_TEXT.to_string(),
    }
}
