//! Transport error types.
//!
//! Every remote failure is a [`TransportError`]. Each variant records the
//! [`FetchStep`] that failed so callers can say which lookup went wrong.

use std::fmt;

use thiserror::Error;

/// A single remote call the catalog client can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchStep {
    /// One listing page.
    List,
    /// Aggregate species count.
    TotalCount,
    /// Base record by identifier.
    RecordById,
    /// Record details carrying category tags and the species link.
    RecordDetails,
    /// Species resource carrying the evolution-chain link.
    Species,
    /// Evolution-chain resource.
    EvolutionChain,
}

impl FetchStep {
    /// Human-readable purpose of the call, e.g. `fetch Pokemon by ID`.
    #[must_use]
    pub const fn purpose(self) -> &'static str {
        match self {
            Self::List => "fetch Pokemon list",
            Self::TotalCount => "fetch total Pokemon count",
            Self::RecordById => "fetch Pokemon by ID",
            Self::RecordDetails => "fetch Pokemon details",
            Self::Species => "fetch Pokemon species details",
            Self::EvolutionChain => "fetch Pokemon evolution chain",
        }
    }
}

impl fmt::Display for FetchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.purpose())
    }
}

/// A remote call did not produce a usable response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or protocol failure before a status was received, or while
    /// reading the body.
    #[error("Failed to {step}: HTTP error: {source}")]
    Http {
        step: FetchStep,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status code.
    #[error("Failed to {step}: API error ({status}): {message}")]
    Api {
        step: FetchStep,
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, possibly empty.
        message: String,
    },

    /// The body did not have the shape the step consumes.
    #[error("Failed to {step}: unexpected response: {reason}")]
    Decode { step: FetchStep, reason: String },
}

impl TransportError {
    /// The step that failed.
    #[must_use]
    pub const fn step(&self) -> FetchStep {
        match self {
            Self::Http { step, .. } | Self::Api { step, .. } | Self::Decode { step, .. } => *step,
        }
    }

    #[must_use]
    pub const fn purpose(&self) -> &'static str {
        self.step().purpose()
    }

    /// `true` when the service answered 404 for the requested resource.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
