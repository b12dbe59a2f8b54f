//! Caller-owned search state.
//!
//! [`SearchSession`] holds what a front end shows: the current page, the
//! search input, the loaded listing, and the resolved detail. Page loads and
//! identifier lookups each draw from their own [`GenerationCounter`], so a
//! page change never invalidates an in-flight lookup and vice versa. Results
//! from superseded requests are dropped on arrival.

use dex_core::{CoreError, EnrichedDetail, PageWindow, PaginationMeta};

use crate::browser::BrowsePage;
use crate::dispatch::{Query, SearchOutcome};
use crate::generation::{Generation, GenerationCounter, Tagged};
use crate::TransportError;

/// Work the caller must start after a search input change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchRequest {
    /// Resolve `id` and hand the tagged result to
    /// [`SearchSession::apply_detail`].
    Resolve { generation: Generation, id: u32 },
    /// Nothing to fetch; the loaded page is filtered locally.
    Local,
}

#[derive(Debug)]
pub struct SearchSession {
    page_number: u32,
    query: Query,
    page_generations: GenerationCounter,
    lookup_generations: GenerationCounter,
    loaded: Option<BrowsePage>,
    detail: Option<EnrichedDetail>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    /// Session on page 1 with an empty search.
    #[must_use]
    pub fn new() -> Self {
        Self {
            page_number: 1,
            query: Query::classify(""),
            page_generations: GenerationCounter::new(),
            lookup_generations: GenerationCounter::new(),
            loaded: None,
            detail: None,
        }
    }

    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.page_number
    }

    #[must_use]
    pub const fn query(&self) -> &Query {
        &self.query
    }

    #[must_use]
    pub const fn loaded_page(&self) -> Option<&BrowsePage> {
        self.loaded.as_ref()
    }

    /// Metadata of the loaded page, unknown before the first load.
    #[must_use]
    pub fn meta(&self) -> PaginationMeta {
        self.loaded
            .as_ref()
            .map_or_else(PaginationMeta::unknown, |page| page.meta)
    }

    /// Start loading `page_number`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPage`] for page 0.
    pub fn request_page(
        &mut self,
        page_number: u32,
    ) -> Result<(Generation, PageWindow), CoreError> {
        let window = PageWindow::new(page_number)?;
        self.page_number = page_number;
        Ok((self.page_generations.advance(), window))
    }

    /// Start loading the next page, or `None` at the last known page.
    pub fn request_next_page(&mut self) -> Option<(Generation, PageWindow)> {
        let target = self.meta().next_page(self.page_number);
        if target == self.page_number {
            return None;
        }
        self.request_page(target).ok()
    }

    /// Start loading the previous page, or `None` on page 1.
    pub fn request_previous_page(&mut self) -> Option<(Generation, PageWindow)> {
        let target = self.meta().previous_page(self.page_number);
        if target == self.page_number {
            return None;
        }
        self.request_page(target).ok()
    }

    /// Apply a page load.
    ///
    /// Returns `Ok(false)` when the result is stale and was dropped, and
    /// `Ok(true)` when it replaced the loaded page.
    ///
    /// # Errors
    ///
    /// Returns the load's [`TransportError`] when the current request failed.
    /// The previously loaded page is cleared.
    pub fn apply_page(
        &mut self,
        tagged: Tagged<Result<BrowsePage, TransportError>>,
    ) -> Result<bool, TransportError> {
        let Some(result) = self.page_generations.accept(tagged) else {
            return Ok(false);
        };
        match result {
            Ok(page) => {
                self.loaded = Some(page);
                Ok(true)
            }
            Err(error) => {
                self.loaded = None;
                Err(error)
            }
        }
    }

    /// Replace the search input.
    ///
    /// Any lookup still in flight becomes stale and the shown detail is
    /// cleared.
    pub fn set_search(&mut self, input: &str) -> SearchRequest {
        self.query = Query::classify(input);
        self.detail = None;
        let generation = self.lookup_generations.advance();
        match self.query {
            Query::Identifier(id) => SearchRequest::Resolve { generation, id },
            Query::Name(_) | Query::Unmatchable => SearchRequest::Local,
        }
    }

    /// Apply an identifier lookup. Returns whether the result was current.
    ///
    /// A current failure leaves the detail empty.
    pub fn apply_detail(&mut self, tagged: Tagged<Result<EnrichedDetail, TransportError>>) -> bool {
        let Some(result) = self.lookup_generations.accept(tagged) else {
            return false;
        };
        self.detail = match result {
            Ok(detail) => Some(detail),
            Err(error) => {
                tracing::warn!(%error, "no detail available for identifier");
                None
            }
        };
        true
    }

    /// What should be displayed right now.
    #[must_use]
    pub fn outcome(&self) -> SearchOutcome {
        self.query.outcome(
            self.detail.as_ref(),
            self.loaded.as_ref().map(|page| page.results.as_slice()),
        )
    }
}
