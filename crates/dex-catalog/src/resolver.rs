//! Identifier lookup enriched with category tags and lineage.
//!
//! Four dependent calls, strictly in order:
//! 1. base record at `{base}/pokemon/{id}` (name, sprite)
//! 2. record details at the canonical URL from step 1 (type tags, species link)
//! 3. species resource (evolution-chain link)
//! 4. evolution chain, walked along its first branch
//!
//! Any failure aborts the lookup. No partial detail is returned.

use dex_core::{DetailRecord, EnrichedDetail, LineageEntry, RecordId};
use serde::Deserialize;

use crate::generation::{Generation, Tagged};
use crate::lineage::{ChainResponse, first_branch_lineage};
use crate::transport::CatalogTransport;
use crate::{CatalogClient, FetchStep, TransportError};

#[derive(Deserialize)]
struct RecordResponse {
    name: String,
    #[serde(default)]
    sprites: Sprites,
}

#[derive(Default, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

#[derive(Deserialize)]
struct RecordDetailsResponse {
    types: Vec<TypeSlot>,
    species: ResourceLink,
}

#[derive(Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Deserialize)]
struct ResourceLink {
    url: String,
}

#[derive(Deserialize)]
struct SpeciesResponse {
    evolution_chain: ResourceLink,
}

/// Output of step 2.
struct RecordDetails {
    category_tags: Vec<String>,
    species_url: String,
}

impl<T: CatalogTransport> CatalogClient<T> {
    /// Resolve `id` into an [`EnrichedDetail`].
    ///
    /// # Errors
    ///
    /// Returns the [`TransportError`] of the first step that failed; its
    /// [`FetchStep`] names the step.
    pub async fn resolve_by_id(&self, id: RecordId) -> Result<EnrichedDetail, TransportError> {
        let record = self.fetch_record(id).await?;
        let details = self.fetch_record_details(&record.url).await?;
        let chain_url = self.fetch_chain_url(&details.species_url).await?;
        let lineage = self.fetch_lineage(&chain_url).await?;

        tracing::debug!(
            id,
            name = %record.name,
            tags = details.category_tags.len(),
            lineage = lineage.len(),
            "resolved record"
        );

        Ok(EnrichedDetail {
            record,
            category_tags: details.category_tags,
            lineage,
        })
    }

    /// [`Self::resolve_by_id`] tagged with the generation that requested it.
    pub async fn resolve_by_id_tagged(
        &self,
        generation: Generation,
        id: RecordId,
    ) -> Tagged<Result<EnrichedDetail, TransportError>> {
        generation.tag(self.resolve_by_id(id).await)
    }

    async fn fetch_record(&self, id: RecordId) -> Result<DetailRecord, TransportError> {
        let url = self.endpoints.record(id);
        let data: RecordResponse = self.fetch(&url, FetchStep::RecordById).await?;
        Ok(DetailRecord {
            name: data.name,
            url,
            image: data.sprites.front_default,
        })
    }

    async fn fetch_record_details(&self, record_url: &str) -> Result<RecordDetails, TransportError> {
        let data: RecordDetailsResponse = self.fetch(record_url, FetchStep::RecordDetails).await?;
        Ok(RecordDetails {
            category_tags: data.types.into_iter().map(|slot| slot.kind.name).collect(),
            species_url: data.species.url,
        })
    }

    async fn fetch_chain_url(&self, species_url: &str) -> Result<String, TransportError> {
        let data: SpeciesResponse = self.fetch(species_url, FetchStep::Species).await?;
        Ok(data.evolution_chain.url)
    }

    async fn fetch_lineage(&self, chain_url: &str) -> Result<Vec<LineageEntry>, TransportError> {
        let data: ChainResponse = self.fetch(chain_url, FetchStep::EvolutionChain).await?;
        first_branch_lineage(&data.chain).map_err(|e| TransportError::Decode {
            step: FetchStep::EvolutionChain,
            reason: e.to_string(),
        })
    }
}
