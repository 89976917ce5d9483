//! Reply embed formatting.

use bot_core::Embed;
use inat_client::{Observation, Taxon};

/// iNaturalist brand color.
const BRAND_COLOR: u32 = 0x74AC00;

/// Embed for a random sighting of a resolved taxon.
///
/// The observation's own taxon identification takes precedence over the
/// resolved candidate for naming, since the pool can contain finer
/// identifications than what was searched for.
pub(crate) fn sighting_embed(
    observation: &Observation,
    resolved: &Taxon,
    query: &str,
    prefix: &str,
) -> Embed {
    let (scientific, common) = observation_names(observation, resolved);
    let observed = observation
        .observed_on_string
        .as_deref()
        .unwrap_or("Unknown date");

    let mut embed = Embed::new(format!("\u{1F43E} Random {} Sighting", title_case(common)))
        .description(format!("*{scientific}*\nObserved on {observed}"))
        .color(BRAND_COLOR)
        .url(observation.permalink())
        .field("Location", place(observation), true)
        .field("Observer", observation.user.login.clone(), true)
        .footer(format!("Not the right animal? Try {prefix}taxonhelp {query}"));

    if let Some(photo) = observation.photos.first() {
        embed = embed.image(photo.medium_url());
    }

    embed
}

/// Embed for the `!deer` alias. Same fields, deer-specific flavor, and no
/// taxonhelp footer.
pub(crate) fn deer_embed(observation: &Observation) -> Embed {
    let observed = observation
        .observed_on_string
        .as_deref()
        .unwrap_or("Unknown date");

    let mut embed = Embed::new("\u{1F98C} BLEAT!")
        .description(format!("Observed on {observed}"))
        .color(BRAND_COLOR)
        .url(observation.permalink())
        .field("Location", place(observation), true)
        .field("Observer", observation.user.login.clone(), true);

    if let Some(photo) = observation.photos.first() {
        embed = embed.image(photo.medium_url());
    }

    embed
}

/// Embed listing taxa matches for `!taxonhelp`.
pub(crate) fn taxonhelp_embed(query: &str, taxa: &[Taxon], prefix: &str) -> Embed {
    let mut embed = Embed::new(format!("\u{1F52C} Taxonomy Results for '{query}'"))
        .description(
            "Here are the top matches. Try using one of these scientific names \
             for a more accurate search!",
        )
        .color(BRAND_COLOR);

    for taxon in taxa {
        let common = taxon
            .preferred_common_name
            .as_deref()
            .unwrap_or("No common name");
        let rank = capitalize(taxon.rank.as_deref().unwrap_or("unknown"));
        let scientific = &taxon.name;

        embed = embed.field(
            format!("{common} ({rank})"),
            format!("Scientific: `{scientific}`\nTry: `{prefix}animal {scientific}`"),
            false,
        );
    }

    embed
}

/// Names to show for an observation, preferring its own identification.
fn observation_names<'a>(observation: &'a Observation, resolved: &'a Taxon) -> (&'a str, &'a str) {
    let taxon = observation.taxon.as_ref().unwrap_or(resolved);
    (&taxon.name, taxon.display_name())
}

fn place(observation: &Observation) -> String {
    observation
        .place_guess
        .clone()
        .unwrap_or_else(|| "Unknown location".to_string())
}

/// Title-case a name: a letter following a non-letter is uppercased,
/// every other letter lowercased ("white-tailed deer" ->
/// "White-Tailed Deer").
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_alpha = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
