//! File-level metadata: author and version.

use roxmltree::Node;
use tracing::warn;

use crate::input;
use crate::record::FileAuthor;

/// Author and version read from the file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub file_author: FileAuthor,
    pub file_version: i64,
}

/// Read the file author and version from the document root.
///
/// Both fields are informational: absence degrades to a warning and a
/// default, never a failure.
pub fn file_metadata(root: Node) -> FileMetadata {
    let name = match input::child_text(root, "fileAuthor") {
        Some(name) => name.to_string(),
        None => {
            warn!("no fileAuthor given");
            String::new()
        }
    };

    // Versions arrive as separate major/minor elements and are collapsed to
    // a single integer through float coercion, so "1.5" becomes 1.
    let mut version = 0;
    match input::find(root, "fileVersion") {
        None => warn!("no fileVersion given"),
        Some(elem) => {
            let major = input::child_text(elem, "major");
            let minor = input::child_text(elem, "minor");
            match (major, minor) {
                (Some(major), Some(minor)) => {
                    match format!("{}.{}", major, minor).parse::<f64>() {
                        Ok(value) => version = value as i64,
                        Err(_) => warn!(major, minor, "unparseable fileVersion"),
                    }
                }
                _ => warn!("missing fileVersion major/minor"),
            }
        }
    }

    FileMetadata {
        file_author: FileAuthor { name, orcid: None },
        file_version: version,
    }
}
