//! # dex-catalog
//!
//! Lookup aggregation over the remote species catalog.
//!
//! - [`browser`]: listing pages, the aggregate count, pagination metadata
//! - [`resolver`]: identifier lookup enriched with category tags and lineage
//! - [`lineage`]: evolution-chain tree and first-branch traversal
//! - [`dispatch`]: routes a search input to identifier lookup or a local
//!   name filter
//! - [`generation`] / [`session`]: request generations so callers drop stale
//!   results
//!
//! All remote access goes through [`CatalogTransport`]; [`HttpTransport`] is
//! the reqwest implementation.

pub mod browser;
pub mod dispatch;
pub mod generation;
pub mod lineage;
pub mod resolver;
pub mod session;
pub mod transport;

mod error;
mod http;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use browser::{BrowsePage, ListPage};
pub use dispatch::{Query, SearchOutcome};
pub use error::{FetchStep, TransportError};
pub use generation::{Generation, GenerationCounter, Tagged};
pub use http::{HttpTransport, check_response};
pub use session::SearchSession;
pub use transport::{CatalogTransport, Endpoints};

use dex_config::ApiConfig;
use serde::de::DeserializeOwned;

/// Client for the catalog service.
///
/// Browsing lives in [`browser`], identifier lookup in [`resolver`], and query
/// routing in [`dispatch`]; each adds its own `impl` block.
#[derive(Debug, Clone)]
pub struct CatalogClient<T = HttpTransport> {
    transport: T,
    endpoints: Endpoints,
}

impl CatalogClient<HttpTransport> {
    /// Build an HTTP-backed client from configuration.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest::Error` raised while building the HTTP client.
    pub fn from_config(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_transport(
            HttpTransport::new(config)?,
            config.base_url(),
        ))
    }
}

impl<T: CatalogTransport> CatalogClient<T> {
    /// Build a client over any transport rooted at `base_url`.
    #[must_use]
    pub fn with_transport(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            endpoints: Endpoints::new(base_url),
        }
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// GET `url` and decode it into the shape `step` consumes.
    async fn fetch<D: DeserializeOwned>(
        &self,
        url: &str,
        step: FetchStep,
    ) -> Result<D, TransportError> {
        let value = self.transport.get_json(url, step).await?;
        serde_json::from_value(value).map_err(|e| TransportError::Decode {
            step,
            reason: e.to_string(),
        })
    }
}
