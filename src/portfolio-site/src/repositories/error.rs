//! Repository fetch error types.

use thiserror::Error;

/// A repository lookup failed.
///
/// Covers network errors, non-success statuses and malformed payloads alike;
/// any of them aborts the whole fetch.
#[derive(Debug, Error)]
#[error("Failed to fetch repository '{repository}': {source}")]
pub struct FetchError {
    /// Identifier whose lookup failed.
    pub repository: String,

    /// Underlying GitHub client error.
    #[source]
    pub source: octocrab::Error,
}
