//! # dex-core
//!
//! Core types shared by every dex crate:
//! - Catalog record shapes (summary, detail, enriched detail, lineage entries)
//! - Page window and pagination metadata math
//! - Identifier extraction from canonical resource URLs
//! - Cross-cutting validation errors
//! - JSON Schema lookup for the record types

pub mod errors;
pub mod ids;
pub mod pagination;
pub mod records;
pub mod schema;

pub use errors::CoreError;
pub use ids::{RecordId, id_from_url};
pub use pagination::{PAGE_SIZE, PageWindow, PaginationMeta};
pub use records::{DetailRecord, EnrichedDetail, LineageEntry, SummaryRecord};
