//! Mock DOI lookup for testing.

use crate::record::Author;

use super::lookup::{DoiLookup, LookupError, ReferenceData};

/// What the mock should answer with.
#[derive(Debug, Clone)]
enum MockResponse {
    Success(ReferenceData),
    NotFound,
    Unreachable,
}

/// Mock lookup service that returns a fixed response for any DOI.
pub struct MockLookup {
    response: MockResponse,
}

impl MockLookup {
    /// Answer every lookup with the given citation data.
    pub fn with_reference(data: ReferenceData) -> Self {
        Self {
            response: MockResponse::Success(data),
        }
    }

    /// Answer every lookup with a representative successful citation.
    pub fn with_sample_reference() -> Self {
        Self::with_reference(ReferenceData {
            journal: "International Journal of Chemical Kinetics".to_string(),
            year: 2007,
            volume: 39,
            pages: Some("87-97".to_string()),
            authors: vec![
                Author {
                    name: "N. Chaumeix".to_string(),
                    orcid: None,
                },
                Author {
                    name: "S. Pichon".to_string(),
                    orcid: Some("http://orcid.org/0000-0002-7300-7919".to_string()),
                },
            ],
        })
    }

    /// Answer every lookup with an authoritative not-found.
    pub fn not_found() -> Self {
        Self {
            response: MockResponse::NotFound,
        }
    }

    /// Fail every lookup with a connectivity error.
    pub fn unreachable() -> Self {
        Self {
            response: MockResponse::Unreachable,
        }
    }
}

impl DoiLookup for MockLookup {
    fn resolve(&self, _doi: &str) -> Result<ReferenceData, LookupError> {
        match &self.response {
            MockResponse::Success(data) => Ok(data.clone()),
            MockResponse::NotFound => Err(LookupError::NotFound),
            MockResponse::Unreachable => {
                Err(LookupError::Connectivity("mock network down".to_string()))
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
