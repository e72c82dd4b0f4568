//! DOI lookup trait and types.

use thiserror::Error;

use crate::record::Author;

/// Citation data returned by a successful DOI lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    pub journal: String,
    pub year: i32,
    pub volume: i64,
    pub pages: Option<String>,
    pub authors: Vec<Author>,
}

/// Failure modes of a DOI lookup.
///
/// The two variants propagate very differently: a connectivity failure
/// degrades the reference to a bare DOI with a warning, while an
/// authoritative not-found aborts the conversion.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// The registry could not be reached (offline, timeout, DNS, ...).
    #[error("network not available: {0}")]
    Connectivity(String),

    /// The registry was reached and does not know the DOI.
    #[error("DOI not found")]
    NotFound,
}

/// A bibliographic lookup service keyed by DOI.
///
/// Implementations must be thread-safe (Send + Sync) so batch callers can
/// share one client across conversions.
pub trait DoiLookup: Send + Sync {
    /// Resolve a DOI into citation data.
    fn resolve(&self, doi: &str) -> Result<ReferenceData, LookupError>;

    /// Get the name of this lookup service (for logging/debugging).
    fn name(&self) -> &str;
}
