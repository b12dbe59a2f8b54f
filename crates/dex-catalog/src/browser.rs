//! Catalog browsing: listing pages and the aggregate record count.

use dex_core::{PageWindow, PaginationMeta, SummaryRecord};
use serde::{Deserialize, Serialize};

use crate::generation::{Generation, Tagged};
use crate::transport::CatalogTransport;
use crate::{CatalogClient, FetchStep, TransportError};

/// Body of one listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage {
    pub results: Vec<SummaryRecord>,
    /// Size of the listed collection, when the service includes it.
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Deserialize)]
struct CountResponse {
    count: u64,
}

/// A listing page together with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowsePage {
    pub window: PageWindow,
    pub results: Vec<SummaryRecord>,
    pub meta: PaginationMeta,
}

impl BrowsePage {
    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.window.page_number
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.meta.has_next(self.window.page_number)
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.meta.has_previous(self.window.page_number)
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.meta.label(self.window.page_number)
    }
}

impl<T: CatalogTransport> CatalogClient<T> {
    /// Fetch the records in `window`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] tagged [`FetchStep::List`] if the request
    /// fails or the body is not a listing.
    pub async fn list_page(&self, window: &PageWindow) -> Result<ListPage, TransportError> {
        let url = self.endpoints.list(window);
        self.fetch(&url, FetchStep::List).await
    }

    /// Fetch the aggregate record count.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] tagged [`FetchStep::TotalCount`]. Callers
    /// usually degrade to [`PaginationMeta::unknown`] instead of failing.
    pub async fn total_count(&self) -> Result<u64, TransportError> {
        let url = self.endpoints.species_count();
        let data: CountResponse = self.fetch(&url, FetchStep::TotalCount).await?;
        Ok(data.count)
    }

    /// Fetch a page and the aggregate count concurrently.
    ///
    /// A failed count is logged and yields unknown pagination metadata; only a
    /// failed listing fails the browse.
    ///
    /// # Errors
    ///
    /// Returns the listing's [`TransportError`].
    pub async fn browse(&self, window: PageWindow) -> Result<BrowsePage, TransportError> {
        let (page, total) = tokio::join!(self.list_page(&window), self.total_count());
        let page = page?;

        let meta = match total {
            Ok(total) => PaginationMeta::from_total(total),
            Err(error) => {
                tracing::warn!(%error, "total count unavailable; pagination is unbounded");
                PaginationMeta::unknown()
            }
        };

        tracing::debug!(
            page = window.page_number,
            records = page.results.len(),
            total_pages = ?meta.total_pages,
            "browsed catalog page"
        );

        Ok(BrowsePage {
            window,
            results: page.results,
            meta,
        })
    }

    /// [`Self::browse`] tagged with the generation that requested it.
    pub async fn browse_tagged(
        &self,
        generation: Generation,
        window: PageWindow,
    ) -> Tagged<Result<BrowsePage, TransportError>> {
        generation.tag(self.browse(window).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{BASE_URL, ScriptedTransport, listing};
    use pretty_assertions::assert_eq;

    fn count_url() -> String {
        format!("{BASE_URL}/pokemon-species")
    }

    fn page_url(offset: u64) -> String {
        format!("{BASE_URL}/pokemon?limit=30&offset={offset}")
    }

    #[tokio::test]
    async fn list_page_requests_window_offset() {
        let transport = ScriptedTransport::new().with_json(
            &page_url(30),
            listing(31, &["nidoking", "clefairy"], Some(1302)),
        );
        let client = CatalogClient::with_transport(transport, BASE_URL);

        let page = client
            .list_page(&PageWindow::new(2).unwrap())
            .await
            .unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "nidoking");
        assert_eq!(page.results[0].id(), Some(31));
        assert_eq!(page.count, Some(1302));
        assert_eq!(
            client.transport().calls(),
            vec![(page_url(30), FetchStep::List)]
        );
    }

    #[tokio::test]
    async fn list_page_without_count_field() {
        let transport =
            ScriptedTransport::new().with_json(&page_url(0), listing(1, &["bulbasaur"], None));
        let client = CatalogClient::with_transport(transport, BASE_URL);

        let page = client.list_page(&PageWindow::first()).await.unwrap();
        assert_eq!(page.count, None);
    }

    #[tokio::test]
    async fn list_page_failure_is_transport_error() {
        let transport = ScriptedTransport::new().with_status(&page_url(0), 500);
        let client = CatalogClient::with_transport(transport, BASE_URL);

        let err = client.list_page(&PageWindow::first()).await.unwrap_err();
        assert_eq!(err.step(), FetchStep::List);
        assert_eq!(err.purpose(), "fetch Pokemon list");
    }

    #[tokio::test]
    async fn total_count_reads_count_field() {
        let transport = ScriptedTransport::new()
            .with_json(&count_url(), serde_json::json!({ "count": 1025, "results": [] }));
        let client = CatalogClient::with_transport(transport, BASE_URL);

        assert_eq!(client.total_count().await.unwrap(), 1025);
    }

    #[tokio::test]
    async fn total_count_missing_field_is_decode_error() {
        let transport =
            ScriptedTransport::new().with_json(&count_url(), serde_json::json!({ "results": [] }));
        let client = CatalogClient::with_transport(transport, BASE_URL);

        let err = client.total_count().await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::Decode {
                step: FetchStep::TotalCount,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn browse_combines_page_and_count() {
        let transport = ScriptedTransport::new()
            .with_json(&page_url(1290), listing(1291, &["a", "b", "c"], None))
            .with_json(&count_url(), serde_json::json!({ "count": 1302 }));
        let client = CatalogClient::with_transport(transport, BASE_URL);

        let page = client.browse(PageWindow::new(44).unwrap()).await.unwrap();

        assert_eq!(page.meta, PaginationMeta::from_total(1302));
        assert_eq!(page.meta.total_pages, Some(44));
        assert_eq!(page.label(), "Page 44 of 44");
        assert!(page.has_previous());
        assert!(!page.has_next());
        assert_eq!(client.transport().calls().len(), 2);
    }

    #[tokio::test]
    async fn browse_soft_degrades_when_count_fails() {
        let transport = ScriptedTransport::new()
            .with_json(&page_url(0), listing(1, &["bulbasaur", "ivysaur"], None))
            .with_status(&count_url(), 503);
        let client = CatalogClient::with_transport(transport, BASE_URL);

        let page = client.browse(PageWindow::first()).await.unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(page.meta, PaginationMeta::unknown());
        assert!(page.has_next());
        assert!(!page.has_previous());
        assert_eq!(page.label(), "Page 1");
    }

    #[tokio::test]
    async fn browse_fails_when_listing_fails() {
        let transport = ScriptedTransport::new()
            .with_status(&page_url(0), 502)
            .with_json(&count_url(), serde_json::json!({ "count": 1302 }));
        let client = CatalogClient::with_transport(transport, BASE_URL);

        let err = client.browse(PageWindow::first()).await.unwrap_err();
        assert_eq!(err.step(), FetchStep::List);
    }

    #[tokio::test]
    async fn browse_tagged_carries_generation() {
        let transport = ScriptedTransport::new()
            .with_json(&page_url(0), listing(1, &["bulbasaur"], None))
            .with_json(&count_url(), serde_json::json!({ "count": 1 }));
        let client = CatalogClient::with_transport(transport, BASE_URL);
        let mut generations = crate::GenerationCounter::new();
        let generation = generations.advance();

        let tagged = client.browse_tagged(generation, PageWindow::first()).await;
        assert_eq!(tagged.generation, generation);
        assert!(tagged.value.is_ok());
    }
}
