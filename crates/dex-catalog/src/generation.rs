//! Request generations.
//!
//! Every request a caller issues gets a [`Generation`] from its
//! [`GenerationCounter`]. Results come back as [`Tagged`] values; a result is
//! applied only if its generation is still the latest one issued, so a slow
//! response to a superseded request can never overwrite a newer one.

use serde::Serialize;

/// Token identifying one request. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Attach this generation to `value`.
    #[must_use]
    pub const fn tag<T>(self, value: T) -> Tagged<T> {
        Tagged {
            generation: self,
            value,
        }
    }
}

/// A result together with the generation of the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged<T> {
    pub generation: Generation,
    pub value: T,
}

/// Caller-owned source of monotonically increasing generations.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    latest: u64,
}

impl GenerationCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    /// Issue the next generation; it becomes the only current one.
    pub const fn advance(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    /// Latest generation issued, or `None` before the first request.
    #[must_use]
    pub const fn latest(&self) -> Option<Generation> {
        if self.latest == 0 {
            None
        } else {
            Some(Generation(self.latest))
        }
    }

    #[must_use]
    pub const fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.latest
    }

    /// Unwrap `tagged` if it belongs to the current generation.
    pub fn accept<T>(&self, tagged: Tagged<T>) -> Option<T> {
        if self.is_current(tagged.generation) {
            Some(tagged.value)
        } else {
            tracing::debug!(
                stale = tagged.generation.get(),
                latest = self.latest,
                "discarding stale result"
            );
            None
        }
    }
}
