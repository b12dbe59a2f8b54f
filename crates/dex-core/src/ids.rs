//! Record identifier helpers.
//!
//! The catalog never returns identifiers as fields. A record's id is the
//! trailing numeric segment of its canonical URL, e.g.
//! `https://pokeapi.co/api/v2/pokemon/25/` -> `25`.

/// Numeric identifier of a catalog record.
pub type RecordId = u32;

/// Extract the record identifier from the last non-empty `/` segment of `url`.
///
/// A trailing slash is ignored. Returns `None` when the URL has no segments or
/// the last segment is not a plain base-10 number.
#[must_use]
pub fn id_from_url(url: &str) -> Option<RecordId> {
    let segment = url.split('/').filter(|s| !s.is_empty()).next_back()?;
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
