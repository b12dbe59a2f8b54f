//! The seam between the lookup logic and the wire.
//!
//! [`CatalogTransport`] performs one GET and hands back the decoded JSON body.
//! [`crate::HttpTransport`] is the production implementation; tests script
//! responses in memory.

use async_trait::async_trait;
use dex_core::{PageWindow, RecordId};

use crate::error::{FetchStep, TransportError};

/// Issues idempotent GET requests against the catalog service.
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// Fetch `url` and return its JSON body.
    ///
    /// Any non-success status, network failure, or non-JSON body is reported
    /// as a [`TransportError`] tagged with `step`.
    async fn get_json(
        &self,
        url: &str,
        step: FetchStep,
    ) -> Result<serde_json::Value, TransportError>;
}

/// URL layout of the catalog service under a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Listing page: `{base}/pokemon?limit=30&offset=N`.
    #[must_use]
    pub fn list(&self, window: &PageWindow) -> String {
        format!(
            "{}/pokemon?limit={}&offset={}",
            self.base_url, window.page_size, window.offset
        )
    }

    /// Canonical record URL: `{base}/pokemon/{id}`.
    #[must_use]
    pub fn record(&self, id: RecordId) -> String {
        format!("{}/pokemon/{id}", self.base_url)
    }

    /// Aggregate count resource: `{base}/pokemon-species`.
    #[must_use]
    pub fn species_count(&self) -> String {
        format!("{}/pokemon-species", self.base_url)
    }
}
