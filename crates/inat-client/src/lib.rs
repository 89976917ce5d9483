//! Client for the iNaturalist v1 API.
//!
//! Two read-only endpoints are consumed, both public and unauthenticated:
//!
//! - `/taxa` - taxon search by name, returning candidates in the
//!   provider's own relevance order
//! - `/observations` - observation search by taxon id, first page only
//!
//! # Example
//!
//! ```rust,no_run
//! use inat_client::{InatClient, InatConfig};
//!
//! # async fn example() -> Result<(), inat_client::InatError> {
//! let client = InatClient::new(InatConfig::default())?;
//!
//! let taxa = client.search_taxa("goat", 20).await?;
//! if let Some(taxon) = taxa.first() {
//!     let observations = client.observations_for_taxon(taxon.id).await?;
//!     println!("{} observations of {}", observations.len(), taxon.name);
//! }
//! # Ok(())
//! # }
//! ```

mod api_types;
mod client;
mod config;
mod error;

pub use api_types::{Observation, Observer, PageResponse, Photo, Taxon};
pub use client::InatClient;
pub use config::InatConfig;
pub use error::InatError;
