//! Search-input routing.
//!
//! A purely numeric input is an identifier lookup; anything else filters the
//! page that is already loaded. Name search never issues a remote call.

use dex_core::{EnrichedDetail, RecordId, SummaryRecord};
use serde::Serialize;

use crate::CatalogClient;
use crate::transport::CatalogTransport;

/// How a search input is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Trimmed input is all ASCII digits.
    Identifier(RecordId),
    /// Case-insensitive substring filter; holds the trimmed, lowercased needle.
    Name(String),
    /// All digits but too large to be an identifier. Matches nothing.
    Unmatchable,
}

impl Query {
    #[must_use]
    pub fn classify(input: &str) -> Self {
        let trimmed = input.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return trimmed
                .parse()
                .map_or(Self::Unmatchable, Self::Identifier);
        }
        Self::Name(trimmed.to_lowercase())
    }

    /// What to display for this query.
    ///
    /// `detail` is the finished identifier lookup, `None` if it failed or
    /// never ran. `loaded_page` is only read for name searches; without a
    /// loaded page there is nothing to filter.
    #[must_use]
    pub fn outcome(
        &self,
        detail: Option<&EnrichedDetail>,
        loaded_page: Option<&[SummaryRecord]>,
    ) -> SearchOutcome {
        match self {
            Self::Identifier(_) => detail.map_or(SearchOutcome::Empty, |detail| {
                SearchOutcome::Detail(Box::new(detail.clone()))
            }),
            Self::Name(needle) => loaded_page.map_or(SearchOutcome::Empty, |page| {
                SearchOutcome::Listing(filter_page(page, needle))
            }),
            Self::Unmatchable => SearchOutcome::Empty,
        }
    }
}

/// What the caller should display for a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "records", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Exactly one enriched record from an identifier lookup.
    Detail(Box<EnrichedDetail>),
    /// Records of the loaded page whose names match.
    Listing(Vec<SummaryRecord>),
    /// Nothing to show. A failed identifier lookup lands here, not on the
    /// listing.
    Empty,
}

impl SearchOutcome {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        match self {
            Self::Detail(_) => false,
            Self::Listing(records) => records.is_empty(),
            Self::Empty => true,
        }
    }
}

/// Records of `page` whose name contains `needle_lower`.
#[must_use]
pub fn filter_page(page: &[SummaryRecord], needle_lower: &str) -> Vec<SummaryRecord> {
    page.iter()
        .filter(|record| record.name_contains(needle_lower))
        .cloned()
        .collect()
}

impl<T: CatalogTransport> CatalogClient<T> {
    /// Route `input` and produce what should be displayed.
    ///
    /// `loaded_page` is the listing the caller currently shows; it is only
    /// read for name searches.
    pub async fn dispatch(&self, input: &str, loaded_page: &[SummaryRecord]) -> SearchOutcome {
        let query = Query::classify(input);
        let detail = match query {
            Query::Identifier(id) => match self.resolve_by_id(id).await {
                Ok(detail) => Some(detail),
                Err(error) => {
                    tracing::warn!(id, %error, "identifier lookup failed");
                    None
                }
            },
            Query::Name(_) | Query::Unmatchable => None,
        };
        query.outcome(detail.as_ref(), Some(loaded_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{BASE_URL, ScriptedTransport, pikachu_transport};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn page() -> Vec<SummaryRecord> {
        ["pichu", "pikachu", "raichu", "Pidgey"]
            .iter()
            .zip(1..)
            .map(|(name, id)| SummaryRecord {
                name: (*name).to_string(),
                url: format!("{BASE_URL}/pokemon/{id}/"),
            })
            .collect()
    }

    #[rstest]
    #[case("25", Query::Identifier(25))]
    #[case("  25 ", Query::Identifier(25))]
    #[case("007", Query::Identifier(7))]
    #[case("0", Query::Identifier(0))]
    #[case("pika", Query::Name("pika".into()))]
    #[case("PIKA", Query::Name("pika".into()))]
    #[case("25abc", Query::Name("25abc".into()))]
    #[case("-25", Query::Name("-25".into()))]
    #[case("2 5", Query::Name("2 5".into()))]
    #[case("", Query::Name(String::new()))]
    #[case("99999999999", Query::Unmatchable)]
    fn classifies_input(#[case] input: &str, #[case] expected: Query) {
        assert_eq!(Query::classify(input), expected);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let matched = filter_page(&page(), "pi");
        let names: Vec<_> = matched.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["pichu", "pikachu", "Pidgey"]);
    }

    #[tokio::test]
    async fn name_input_filters_loaded_page_without_remote_calls() {
        let client = CatalogClient::with_transport(ScriptedTransport::new(), BASE_URL);

        let outcome = client.dispatch("PIKA", &page()).await;

        match outcome {
            SearchOutcome::Listing(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].name, "pikachu");
            }
            other => panic!("expected listing, got {other:?}"),
        }
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn empty_input_shows_whole_page() {
        let client = CatalogClient::with_transport(ScriptedTransport::new(), BASE_URL);
        let outcome = client.dispatch("   ", &page()).await;
        assert_eq!(outcome, SearchOutcome::Listing(page()));
    }

    #[tokio::test]
    async fn numeric_input_resolves_identifier() {
        let client = CatalogClient::with_transport(pikachu_transport(), BASE_URL);

        let outcome = client.dispatch("25", &page()).await;

        match outcome {
            SearchOutcome::Detail(detail) => {
                assert_eq!(detail.record.name, "pikachu");
                assert_eq!(detail.lineage.len(), 3);
            }
            other => panic!("expected detail, got {other:?}"),
        }
        assert_eq!(client.transport().calls().len(), 4);
    }

    #[tokio::test]
    async fn failed_lookup_is_empty_not_listing() {
        let client = CatalogClient::with_transport(ScriptedTransport::new(), BASE_URL);

        let outcome = client.dispatch("4040", &page()).await;

        assert_eq!(outcome, SearchOutcome::Empty);
        assert!(outcome.is_empty());
    }

    #[tokio::test]
    async fn oversized_number_matches_nothing_without_calls() {
        let client = CatalogClient::with_transport(ScriptedTransport::new(), BASE_URL);
        let outcome = client.dispatch("123456789012345", &page()).await;
        assert_eq!(outcome, SearchOutcome::Empty);
        assert!(client.transport().calls().is_empty());
    }

    #[test]
    fn identifier_without_detail_never_falls_back_to_listing() {
        let records = page();
        let outcome = Query::Identifier(25).outcome(None, Some(&records));
        assert_eq!(outcome, SearchOutcome::Empty);
    }

    #[test]
    fn name_without_loaded_page_is_empty() {
        assert_eq!(Query::Name("pi".into()).outcome(None, None), SearchOutcome::Empty);
    }

    #[test]
    fn outcome_serializes_with_kind_tag() {
        let value = serde_json::to_value(SearchOutcome::Empty).unwrap();
        assert_eq!(value, serde_json::json!({ "kind": "empty" }));

        let value = serde_json::to_value(SearchOutcome::Listing(Vec::new())).unwrap();
        assert_eq!(value["kind"], "listing");
        assert!(value["records"].as_array().unwrap().is_empty());
    }
}
