//! JSON Schema lookup for the public record types.
//!
//! Schemas are generated on demand with [`schemars::schema_for!`].

use schemars::schema_for;

use crate::pagination::{PageWindow, PaginationMeta};
use crate::records::{DetailRecord, EnrichedDetail, LineageEntry, SummaryRecord};

/// Names accepted by [`schema_for_name`], in display order.
pub const SCHEMA_NAMES: &[&str] = &[
    "summary_record",
    "detail_record",
    "enriched_detail",
    "lineage_entry",
    "page_window",
    "pagination_meta",
];

/// JSON Schema for the type registered under `name`.
///
/// Dashes are accepted in place of underscores. Returns `None` for unknown
/// names.
#[must_use]
pub fn schema_for_name(name: &str) -> Option<serde_json::Value> {
    let schema = match name.replace('-', "_").as_str() {
        "summary_record" => schema_for!(SummaryRecord),
        "detail_record" => schema_for!(DetailRecord),
        "enriched_detail" => schema_for!(EnrichedDetail),
        "lineage_entry" => schema_for!(LineageEntry),
        "page_window" => schema_for!(PageWindow),
        "pagination_meta" => schema_for!(PaginationMeta),
        _ => return None,
    };
    serde_json::to_value(schema).ok()
}
