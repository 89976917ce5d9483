//! iNaturalist API response types.
//!
//! Only the fields this bot reads are modeled; the API returns far more.

use serde::Deserialize;

/// Base URL for human-facing observation pages.
const OBSERVATION_PAGE_BASE: &str = "https://www.inaturalist.org/observations";

/// A paged API response. Both `/taxa` and `/observations` use this shape.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse<T> {
    /// Total results across all pages.
    pub total_results: u64,
    /// Results for this page, in the provider's relevance order.
    pub results: Vec<T>,
}

/// A taxon candidate from `/taxa` search.
#[derive(Debug, Clone, Deserialize)]
pub struct Taxon {
    /// Stable numeric id in the provider's database.
    pub id: u64,

    /// Scientific (Latin) name.
    pub name: String,

    /// Taxonomic rank: "species", "genus", "family", ...
    #[serde(default)]
    pub rank: Option<String>,

    /// Colloquial name, when the provider knows one.
    #[serde(default)]
    pub preferred_common_name: Option<String>,

    /// Coarse kingdom-level bucket ("Aves", "Mammalia", "Plantae", ...).
    #[serde(default)]
    pub iconic_taxon_name: Option<String>,
}

impl Taxon {
    /// The name to show users: common name when known, scientific otherwise.
    pub fn display_name(&self) -> &str {
        self.preferred_common_name.as_deref().unwrap_or(&self.name)
    }

    /// Whether this taxon is at species rank.
    pub fn is_species(&self) -> bool {
        self.rank.as_deref() == Some("species")
    }
}

/// The user who submitted an observation.
#[derive(Debug, Clone, Deserialize)]
pub struct Observer {
    /// Provider login name.
    pub login: String,
}

/// A photo attached to an observation.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    /// Thumbnail URL. The API hands out the "square" size.
    pub url: String,
}

impl Photo {
    /// URL of the medium-sized rendition, suitable for embedding.
    ///
    /// The API only returns the square thumbnail URL; other sizes live at
    /// the same path with the size segment swapped.
    pub fn medium_url(&self) -> String {
        self.url.replace("square", "medium")
    }
}

/// An observation from `/observations` search.
#[derive(Debug, Clone, Deserialize)]
pub struct Observation {
    /// Observation id, also the permalink slug.
    pub id: u64,

    /// Free-text place description, if the observer provided one.
    #[serde(default)]
    pub place_guess: Option<String>,

    /// Observation date as the observer wrote it.
    #[serde(default)]
    pub observed_on_string: Option<String>,

    /// Who observed it.
    pub user: Observer,

    /// Attached photos. Requests ask for photos, but stay defensive.
    #[serde(default)]
    pub photos: Vec<Photo>,

    /// The taxon the observation is identified as.
    #[serde(default)]
    pub taxon: Option<Taxon>,
}

impl Observation {
    /// Link to the observation's page on inaturalist.org.
    pub fn permalink(&self) -> String {
        format!("{}/{}", OBSERVATION_PAGE_BASE, self.id)
    }
}
