//! iNaturalist API HTTP client.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api_types::{Observation, PageResponse, Taxon};
use crate::config::InatConfig;
use crate::error::InatError;

/// Iconic taxa the bot never wants back from a search. The `iconic_taxa`
/// request filter asks for Animalia, but the API still mixes these in for
/// some queries.
const EXCLUDED_ICONIC_TAXA: [&str; 4] = ["Plantae", "Fungi", "Chromista", "Protozoa"];

/// Client for the iNaturalist v1 API.
///
/// Cheap to clone; the underlying connection pool is shared. There is no
/// authentication, no retry, and no state beyond the pool.
#[derive(Clone)]
pub struct InatClient {
    http: Client,
    config: InatConfig,
}

impl InatClient {
    /// Create a new client with the given configuration.
    pub fn new(config: InatConfig) -> Result<Self, InatError> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| InatError::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`InatConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, InatError> {
        Self::new(InatConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &InatConfig {
        &self.config
    }

    /// Search taxa matching a free-text animal name.
    ///
    /// Asks for active Animalia taxa in the provider's relevance order,
    /// then drops any non-animal iconic taxa that slipped through. Returns
    /// at most `limit` candidates; an empty vec means nothing matched.
    pub async fn search_taxa(&self, query: &str, limit: usize) -> Result<Vec<Taxon>, InatError> {
        let per_page = limit.to_string();
        let page: PageResponse<Taxon> = self
            .get_page(
                "/taxa",
                &[
                    ("q", query),
                    ("per_page", per_page.as_str()),
                    ("is_active", "true"),
                    ("iconic_taxa", "Animalia"),
                ],
            )
            .await?;

        debug!(
            "Taxa search for '{}': {} total, {} on page",
            query,
            page.total_results,
            page.results.len()
        );

        let mut taxa: Vec<Taxon> = page
            .results
            .into_iter()
            .filter(|taxon| {
                let keep = taxon
                    .iconic_taxon_name
                    .as_deref()
                    .map_or(true, |iconic| !EXCLUDED_ICONIC_TAXA.contains(&iconic));
                if !keep {
                    debug!("Dropping non-animal taxon {} ({:?})", taxon.name, taxon.iconic_taxon_name);
                }
                keep
            })
            .collect();
        taxa.truncate(limit);

        Ok(taxa)
    }

    /// Fetch the observation pool for a taxon: first page only, photos
    /// required, research grade, at most 100 results.
    ///
    /// An empty vec means the taxon has no qualifying observations.
    pub async fn observations_for_taxon(&self, taxon_id: u64) -> Result<Vec<Observation>, InatError> {
        let taxon_id = taxon_id.to_string();
        let per_page = self.config.observations_per_page.to_string();
        let page: PageResponse<Observation> = self
            .get_page(
                "/observations",
                &[
                    ("taxon_id", taxon_id.as_str()),
                    ("photos", "true"),
                    ("quality_grade", "research"),
                    ("per_page", per_page.as_str()),
                    ("order_by", "random"),
                ],
            )
            .await?;

        debug!(
            "Observation fetch for taxon {}: {} total, {} on page",
            taxon_id,
            page.total_results,
            page.results.len()
        );

        Ok(page.results)
    }

    /// GET a paged endpoint and decode the response.
    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<PageResponse<T>, InatError> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("GET {} {:?}", url, params);

        let response = self.http.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("API request to {} failed with {}: {}", path, status, body);
            return Err(InatError::Status { status, body });
        }

        let page = response.json().await?;
        Ok(page)
    }
}
