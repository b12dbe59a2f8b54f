//! Cross-cutting error types for dex.
//!
//! Remote failures live in `dex-catalog` as `TransportError`; this module only
//! covers values that are rejected before any request is issued.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Page numbers start at 1.
    #[error("Invalid page number {0}: pages start at 1")]
    InvalidPage(u32),
}
