//! Taxon match ranking.
//!
//! The taxa search endpoint returns candidates in the provider's own
//! relevance order, which is often wrong for colloquial names ("goat"
//! ranks mountain goats above the domestic goat). The ranker re-scores
//! candidates by match specificity against the user's query and keeps
//! provider order as the tie-break.

use inat_client::Taxon;

/// How well a candidate matches the query, lowest to highest.
///
/// Within a tier the provider's original order decides; across tiers a
/// higher tier always wins regardless of position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// No textual match anywhere.
    NoMatch,
    /// Query is a substring of the common name, non-species rank.
    PartialCommonOther,
    /// Query is a substring of the common name, species rank.
    PartialCommonSpecies,
    /// Query equals the scientific name.
    ExactScientific,
    /// Query equals the common name.
    ExactCommon,
}

/// Score one candidate against a lowercased query.
pub fn match_tier(query: &str, taxon: &Taxon) -> MatchTier {
    let common = taxon
        .preferred_common_name
        .as_deref()
        .map(|name| name.to_lowercase());

    if common.as_deref() == Some(query) {
        return MatchTier::ExactCommon;
    }
    if taxon.name.to_lowercase() == query {
        return MatchTier::ExactScientific;
    }
    if common.is_some_and(|name| name.contains(query)) {
        if taxon.is_species() {
            return MatchTier::PartialCommonSpecies;
        }
        return MatchTier::PartialCommonOther;
    }
    MatchTier::NoMatch
}

/// Pick the best-matching candidate for a query.
///
/// Candidates must be in the provider's result order. The first candidate
/// of the highest tier wins; when nothing matches textually, that is the
/// provider's own first result (its best guess), by design.
///
/// Returns `None` only for an empty candidate list or a blank query; a
/// blank query is a caller error and should be rejected upstream.
pub fn best_match<'a>(query: &str, candidates: &'a [Taxon]) -> Option<&'a Taxon> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    let mut best: Option<(&Taxon, MatchTier)> = None;
    for taxon in candidates {
        let tier = match_tier(&query, taxon);
        // Strictly-greater keeps the earliest candidate of the top tier.
        if best.map_or(true, |(_, best_tier)| tier > best_tier) {
            best = Some((taxon, tier));
        }
    }

    best.map(|(taxon, _)| taxon)
}
