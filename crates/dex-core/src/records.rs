//! Catalog record shapes.
//!
//! Everything here is produced fresh per request and never persisted.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::{RecordId, id_from_url};

/// One entry of a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SummaryRecord {
    pub name: String,
    /// Canonical resource URL. Its trailing segment is the record id.
    pub url: String,
}

impl SummaryRecord {
    /// Identifier derived from [`Self::url`].
    #[must_use]
    pub fn id(&self) -> Option<RecordId> {
        id_from_url(&self.url)
    }

    /// Case-insensitive substring match on the record name.
    ///
    /// `needle_lower` must already be lowercased.
    #[must_use]
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

/// Base record returned by an identifier lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetailRecord {
    pub name: String,
    pub url: String,
    /// Sprite URI. The catalog leaves it null for some forms.
    pub image: Option<String>,
}

impl DetailRecord {
    #[must_use]
    pub fn id(&self) -> Option<RecordId> {
        id_from_url(&self.url)
    }
}

/// One species on an evolution chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LineageEntry {
    pub name: String,
    pub id: RecordId,
}

impl LineageEntry {
    /// Artwork URL for this species under `sprite_base_url`
    /// (`{base}/{id}.png`).
    #[must_use]
    pub fn sprite_url(&self, sprite_base_url: &str) -> String {
        format!("{}/{}.png", sprite_base_url.trim_end_matches('/'), self.id)
    }
}

/// A detail record merged with its category tags and lineage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EnrichedDetail {
    #[serde(flatten)]
    pub record: DetailRecord,
    /// Tag names in the order the catalog returned them.
    pub category_tags: Vec<String>,
    /// Base form first, then each first-branch successor. Never empty.
    pub lineage: Vec<LineageEntry>,
}

impl EnrichedDetail {
    #[must_use]
    pub fn id(&self) -> Option<RecordId> {
        self.record.id()
    }

    /// Summary view of this record, as shown in a listing.
    #[must_use]
    pub fn summary(&self) -> SummaryRecord {
        SummaryRecord {
            name: self.record.name.clone(),
            url: self.record.url.clone(),
        }
    }
}
