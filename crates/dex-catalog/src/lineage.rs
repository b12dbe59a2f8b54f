//! Evolution-chain shape and first-branch traversal.
//!
//! The service models a chain as a tree: each link names a species and lists
//! the links it evolves to. Lineage follows only the first child of every
//! link, so branching species (e.g. eevee) contribute a single path.

use dex_core::{LineageEntry, id_from_url};
use serde::Deserialize;
use thiserror::Error;

/// Named resource reference as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpeciesRef {
    pub name: String,
    pub url: String,
}

/// One node of an evolution chain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainLink {
    pub species: SpeciesRef,
    /// Successor links, in service order. Empty at a leaf.
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    /// Link without successors.
    #[must_use]
    pub fn leaf(name: &str, url: &str) -> Self {
        Self {
            species: SpeciesRef {
                name: name.to_string(),
                url: url.to_string(),
            },
            evolves_to: Vec::new(),
        }
    }

    #[must_use]
    pub fn evolving_to(mut self, children: Vec<Self>) -> Self {
        self.evolves_to = children;
        self
    }
}

/// Body of the evolution-chain resource.
#[derive(Debug, Deserialize)]
pub(crate) struct ChainResponse {
    pub chain: ChainLink,
}

/// A species on the walked path whose URL carries no numeric id.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("species '{name}' has no numeric id in '{url}'")]
pub struct UnidentifiedSpecies {
    pub name: String,
    pub url: String,
}

/// Walk `root` along the first branch at every link.
///
/// Returns one entry per visited link, root first. The result always holds at
/// least the root.
///
/// # Errors
///
/// Returns [`UnidentifiedSpecies`] if a visited species URL has no numeric
/// trailing segment.
pub fn first_branch_lineage(root: &ChainLink) -> Result<Vec<LineageEntry>, UnidentifiedSpecies> {
    let mut lineage = Vec::new();
    let mut current = Some(root);

    while let Some(link) = current {
        let species = &link.species;
        let id = id_from_url(&species.url).ok_or_else(|| UnidentifiedSpecies {
            name: species.name.clone(),
            url: species.url.clone(),
        })?;
        lineage.push(LineageEntry {
            name: species.name.clone(),
            id,
        });
        current = link.evolves_to.first();
    }

    Ok(lineage)
}
