//! Page window and pagination metadata.
//!
//! The listing endpoint is addressed by `limit`/`offset`; callers work in
//! 1-based page numbers. Page size is fixed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Number of records requested per listing page.
pub const PAGE_SIZE: u32 = 30;

/// The slice of the catalog covered by one listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PageWindow {
    /// 1-based page number.
    pub page_number: u32,
    pub page_size: u32,
    /// Zero-based index of the first record on the page.
    pub offset: u64,
}

impl PageWindow {
    /// Build the window for `page_number`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPage`] when `page_number` is 0.
    pub const fn new(page_number: u32) -> Result<Self, CoreError> {
        if page_number == 0 {
            return Err(CoreError::InvalidPage(page_number));
        }
        Ok(Self {
            page_number,
            page_size: PAGE_SIZE,
            offset: (page_number as u64 - 1) * PAGE_SIZE as u64,
        })
    }

    /// Window for the first page.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            page_number: 1,
            page_size: PAGE_SIZE,
            offset: 0,
        }
    }
}

/// Derived pagination state. Both fields are `None` when the aggregate count
/// could not be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaginationMeta {
    pub total_records: Option<u64>,
    pub total_pages: Option<u64>,
}

impl PaginationMeta {
    /// Metadata for a known record total.
    #[must_use]
    pub const fn from_total(total_records: u64) -> Self {
        Self {
            total_records: Some(total_records),
            total_pages: Some(total_records.div_ceil(PAGE_SIZE as u64)),
        }
    }

    /// Metadata when the total is unavailable. Navigation forward is left
    /// unbounded.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            total_records: None,
            total_pages: None,
        }
    }

    /// Whether "next" is allowed from `page_number`.
    #[must_use]
    pub const fn has_next(&self, page_number: u32) -> bool {
        match self.total_pages {
            Some(total) => (page_number as u64) < total,
            None => true,
        }
    }

    /// Whether "previous" is allowed from `page_number`.
    #[must_use]
    pub const fn has_previous(&self, page_number: u32) -> bool {
        page_number > 1
    }

    /// Page reached by "next". Stays put at the last known page.
    #[must_use]
    pub const fn next_page(&self, page_number: u32) -> u32 {
        if self.has_next(page_number) {
            page_number.saturating_add(1)
        } else {
            page_number
        }
    }

    /// Page reached by "previous". Never goes below 1.
    #[must_use]
    pub const fn previous_page(&self, page_number: u32) -> u32 {
        if page_number > 1 { page_number - 1 } else { 1 }
    }

    /// Human label such as `Page 3 of 44`, or `Page 3` when the total is
    /// unknown.
    #[must_use]
    pub fn label(&self, page_number: u32) -> String {
        match self.total_pages {
            Some(total) => format!("Page {page_number} of {total}"),
            None => format!("Page {page_number}"),
        }
    }
}
