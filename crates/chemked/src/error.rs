//! Error types for the ChemKED library.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for conversion and validation operations.
#[derive(Debug, Error)]
pub enum ChemkedError {
    /// A required structural element is absent from the document.
    #[error("required element '{0}' is missing")]
    MissingElement(String),

    /// A required attribute is absent from an element.
    #[error("required attribute '{attribute}' of '{element}' is missing")]
    MissingAttribute { element: String, attribute: String },

    /// A value is present but outside the accepted vocabulary.
    #[error("keyword not defined: '{0}'")]
    UndefinedKeyword(String),

    /// A value is recognized but explicitly unsupported.
    #[error("{0} not supported")]
    NotImplemented(String),

    /// Cross-field contradiction in the source document.
    #[error("inconsistent input: {0}")]
    Inconsistency(String),

    /// The DOI registry answered with an authoritative negative.
    #[error("DOI '{0}' not found")]
    LookupNotFound(String),

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing the source XML document.
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Error serializing or deserializing the YAML record.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The assembled record failed schema validation.
    #[error("record failed validation with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),
}

impl ChemkedError {
    /// Convenience constructor for [`ChemkedError::MissingElement`].
    pub fn missing_element(name: impl Into<String>) -> Self {
        ChemkedError::MissingElement(name.into())
    }

    /// Convenience constructor for [`ChemkedError::MissingAttribute`].
    pub fn missing_attribute(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        ChemkedError::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }
}

/// Result type alias for ChemKED operations.
pub type Result<T> = std::result::Result<T, ChemkedError>;
