//! Card data model: the raw catalog record and the normalized pack card.

use serde::{Deserialize, Serialize};

/// Description used when a card has no flavor text, abilities or attacks.
const FALLBACK_DESCRIPTION: &str =
    "A mysterious Pokémon card with no detailed description available.";

/// Maximum description length in characters, truncation marker included.
const MAX_DESCRIPTION_CHARS: usize = 250;

const TRUNCATION_MARKER: &str = "...";

/// Named ability printed on a card.
#[derive(Debug, Clone, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub text: String,
}

/// Attack printed on a card. `damage` is free text on the wire ("30+", "×2")
/// and may be absent or empty.
#[derive(Debug, Clone, Deserialize)]
pub struct Attack {
    pub name: String,
    #[serde(default)]
    pub damage: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl Attack {
    fn describe(&self) -> String {
        match self.damage.as_deref().filter(|damage| !damage.is_empty()) {
            Some(damage) => format!("{} ({damage}): {}", self.name, self.text),
            None => format!("{}: {}", self.name, self.text),
        }
    }
}

/// Image asset URLs for a card.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardImages {
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
}

/// Raw card record as returned by the catalog. Fields the fetcher never
/// touches are ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub attacks: Vec<Attack>,
    #[serde(default)]
    pub images: Option<CardImages>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub supertype: Option<String>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
}

impl CatalogCard {
    /// The usable image URL, large preferred over small. Empty strings count
    /// as missing.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        let images = self.images.as_ref()?;
        images
            .large
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| images.small.as_deref().filter(|url| !url.is_empty()))
    }

    /// Derive the display description: flavor text, else the first ability,
    /// else the first attack, else a fixed placeholder.
    fn describe(&self) -> String {
        let description = self
            .flavor_text
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .or_else(|| {
                self.abilities
                    .first()
                    .map(|ability| format!("{}: {}", ability.name, ability.text))
            })
            .or_else(|| self.attacks.first().map(Attack::describe))
            .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());

        truncate_description(&description)
    }

    /// Normalize into the presentation-ready shape. Returns `None` when the
    /// card has no usable image, so every [`PackCard`] carries a non-empty
    /// image URL by construction.
    #[must_use]
    pub fn into_pack_card(self) -> Option<PackCard> {
        let image_url = self.image_url()?.to_string();
        let description = self.describe();

        Some(PackCard {
            id: self.id,
            name: self.name,
            description,
            image_url,
            rarity: self.rarity,
            supertype: self.supertype,
            types: self.types,
        })
    }
}

/// Cleaned, presentation-ready card produced by the fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supertype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
}

/// Cap the description at [`MAX_DESCRIPTION_CHARS`] characters, marker
/// included. Counts Unicode scalar values, never bytes.
fn truncate_description(text: &str) -> String {
    if text.chars().count() <= MAX_DESCRIPTION_CHARS {
        return text.to_string();
    }

    let kept: String = text
        .chars()
        .take(MAX_DESCRIPTION_CHARS - TRUNCATION_MARKER.len())
        .collect();
    format!("{kept}{TRUNCATION_MARKER}")
}
