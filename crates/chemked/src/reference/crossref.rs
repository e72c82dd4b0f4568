//! Crossref works API client.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::{ChemkedError, Result};
use crate::record::Author;

use super::lookup::{DoiLookup, LookupError, ReferenceData};

/// Crossref works API endpoint.
const API_URL: &str = "https://api.crossref.org/works";

/// Resolves DOIs against the public Crossref registry.
pub struct CrossrefClient {
    client: Client,
}

impl CrossrefClient {
    /// Create a new client with a request timeout.
    ///
    /// A timeout surfaces as a connectivity failure, the same as an
    /// unreachable network.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ChemkedError::Config(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl DoiLookup for CrossrefClient {
    fn resolve(&self, doi: &str) -> std::result::Result<ReferenceData, LookupError> {
        let url = format!("{}/{}", API_URL, doi);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| LookupError::Connectivity(e.to_string()))?;

        // Any non-success status is an authoritative negative: the registry
        // answered and the DOI is not resolvable.
        if !response.status().is_success() {
            return Err(LookupError::NotFound);
        }

        let body: Value = response
            .json()
            .map_err(|e| LookupError::Connectivity(e.to_string()))?;

        parse_message(&body["message"]).ok_or(LookupError::NotFound)
    }

    fn name(&self) -> &str {
        "crossref"
    }
}

/// Pull the citation fields out of a Crossref `message` payload.
///
/// A payload missing any required field counts as not found; the registry
/// answered, but the answer is unusable for a citation.
fn parse_message(message: &Value) -> Option<ReferenceData> {
    let journal = message
        .get("container-title")?
        .get(0)?
        .as_str()?
        .to_string();

    let dates = message
        .get("published-print")
        .filter(|value| !value.is_null())
        .or_else(|| message.get("published-online"))?;
    let year = dates.get("date-parts")?.get(0)?.get(0)?.as_i64()? as i32;

    // Crossref encodes volumes as strings.
    let volume = message.get("volume")?.as_str()?.parse::<i64>().ok()?;

    let pages = message
        .get("page")
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut authors = Vec::new();
    for author in message.get("author")?.as_array()? {
        let given = author.get("given")?.as_str()?;
        let family = author.get("family")?.as_str()?;
        let orcid = author
            .get("ORCID")
            .and_then(Value::as_str)
            .map(str::to_string);
        authors.push(Author {
            name: format!("{} {}", given, family),
            orcid,
        });
    }

    Some(ReferenceData {
        journal,
        year,
        volume,
        pages,
        authors,
    })
}
