//! Reference extraction from the bibliography link element.

use roxmltree::Node;
use tracing::{debug, warn};

use crate::error::{ChemkedError, Result};
use crate::input;
use crate::record::Reference;

use super::lookup::{DoiLookup, LookupError};

/// Build the bibliographic reference for the experiment.
///
/// With a `doi` attribute and a lookup service, the full citation is
/// resolved; without a service the reference stays a bare DOI. Without a DOI
/// the `preferredKey` attribute becomes a citation fallback. Only a
/// connectivity failure degrades; a registry not-found aborts.
pub fn resolve(root: Node, lookup: Option<&dyn DoiLookup>) -> Result<Reference> {
    let elem = input::require(root, "bibliographyLink")?;
    let mut reference = Reference::default();

    let Some(doi) = input::attr(elem, "doi") else {
        warn!("missing doi attribute in bibliographyLink");
        match input::attr(elem, "preferredKey") {
            Some(key) => reference.citation = Some(key.to_string()),
            None => warn!("missing preferredKey attribute in bibliographyLink"),
        }
        return Ok(reference);
    };

    reference.doi = Some(doi.to_string());

    let Some(lookup) = lookup else {
        return Ok(reference);
    };

    debug!(service = lookup.name(), doi, "resolving DOI");
    match lookup.resolve(doi) {
        Ok(data) => {
            reference.journal = Some(data.journal);
            reference.year = Some(data.year);
            reference.volume = Some(data.volume);
            reference.pages = data.pages;
            reference.authors = Some(data.authors);
        }
        Err(LookupError::Connectivity(reason)) => {
            warn!(%reason, "network not available, DOI not found");
        }
        Err(LookupError::NotFound) => {
            return Err(ChemkedError::LookupNotFound(doi.to_string()));
        }
    }

    Ok(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::MockLookup;

    fn resolve_xml(xml: &str, lookup: Option<&dyn DoiLookup>) -> Result<Reference> {
        let doc = roxmltree::Document::parse(xml).unwrap();
        resolve(doc.root_element(), lookup)
    }

    const DOI_DOC: &str =
        r#"<experiment><bibliographyLink doi="10.1002/kin.20218"/></experiment>"#;

    #[test]
    fn test_doi_with_successful_lookup() {
        let lookup = MockLookup::with_sample_reference();
        let reference = resolve_xml(DOI_DOC, Some(&lookup)).unwrap();

        assert_eq!(reference.doi.as_deref(), Some("10.1002/kin.20218"));
        assert_eq!(
            reference.journal.as_deref(),
            Some("International Journal of Chemical Kinetics")
        );
        assert_eq!(reference.year, Some(2007));
        assert_eq!(reference.volume, Some(39));
        assert_eq!(reference.pages.as_deref(), Some("87-97"));
        assert_eq!(reference.authors.as_ref().unwrap().len(), 2);
        assert_eq!(reference.citation, None);
    }

    #[test]
    fn test_doi_without_lookup_service() {
        let reference = resolve_xml(DOI_DOC, None).unwrap();

        assert_eq!(reference.doi.as_deref(), Some("10.1002/kin.20218"));
        assert_eq!(reference.journal, None);
        assert_eq!(reference.authors, None);
    }

    #[test]
    fn test_connectivity_failure_degrades_to_bare_doi() {
        let lookup = MockLookup::unreachable();
        let reference = resolve_xml(DOI_DOC, Some(&lookup)).unwrap();

        assert_eq!(reference.doi.as_deref(), Some("10.1002/kin.20218"));
        assert_eq!(reference.journal, None);
        assert_eq!(reference.authors, None);
    }

    #[test]
    fn test_not_found_is_fatal() {
        let lookup = MockLookup::not_found();
        let err = resolve_xml(DOI_DOC, Some(&lookup)).unwrap_err();

        assert!(
            matches!(err, ChemkedError::LookupNotFound(doi) if doi == "10.1002/kin.20218")
        );
    }

    #[test]
    fn test_preferred_key_fallback() {
        let lookup = MockLookup::with_sample_reference();
        let reference = resolve_xml(
            r#"<experiment><bibliographyLink preferredKey="Smith2001"/></experiment>"#,
            Some(&lookup),
        )
        .unwrap();

        assert_eq!(reference.citation.as_deref(), Some("Smith2001"));
        assert_eq!(reference.doi, None);
        assert_eq!(reference.journal, None);
    }

    #[test]
    fn test_no_doi_and_no_preferred_key() {
        let reference = resolve_xml(
            "<experiment><bibliographyLink/></experiment>",
            None,
        )
        .unwrap();

        assert_eq!(reference, Reference::default());
    }

    #[test]
    fn test_missing_bibliography_link() {
        let err = resolve_xml("<experiment/>", None).unwrap_err();
        assert!(
            matches!(err, ChemkedError::MissingElement(name) if name == "bibliographyLink")
        );
    }
}
