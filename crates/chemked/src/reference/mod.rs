//! Bibliographic reference resolution via DOI lookup.

mod crossref;
mod lookup;
mod mock;
mod resolver;

pub use crossref::CrossrefClient;
pub use lookup::{DoiLookup, LookupError, ReferenceData};
pub use mock::MockLookup;
pub use resolver::resolve;
