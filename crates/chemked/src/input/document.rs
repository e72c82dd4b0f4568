//! Typed access helpers over the `roxmltree` document tree.
//!
//! The extractors all speak in terms of "required element", "required
//! attribute", and "element text"; these helpers translate those requests
//! into the error taxonomy so each call site stays a single line.

use roxmltree::Node;

use crate::error::{ChemkedError, Result};

/// Find the first direct child element with the given tag name.
pub fn find<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.has_tag_name(tag))
}

/// Find an element by a `/`-separated path of child tag names.
pub fn find_path<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    let mut current = node;
    for segment in path.split('/') {
        current = find(current, segment)?;
    }
    Some(current)
}

/// Iterate the direct child elements with the given tag name.
pub fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.has_tag_name(tag))
}

/// Find a required direct child element, or fail with `MissingElement`.
pub fn require<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Result<Node<'a, 'input>> {
    find(node, tag).ok_or_else(|| ChemkedError::missing_element(tag))
}

/// Get an optional attribute value.
pub fn attr<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// Get a required attribute value, or fail with `MissingAttribute`.
pub fn require_attr<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    node.attribute(name)
        .ok_or_else(|| ChemkedError::missing_attribute(node.tag_name().name(), name))
}

/// Get the trimmed text content of an element, if non-empty.
pub fn text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.text().map(str::trim).filter(|t| !t.is_empty())
}

/// Get the trimmed text of a required element's content.
pub fn require_text<'a>(node: Node<'a, '_>) -> Result<&'a str> {
    node.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ChemkedError::missing_element(node.tag_name().name().to_string()))
}

/// Get the trimmed text of a direct child element, if present and non-empty.
pub fn child_text<'a>(node: Node<'a, '_>, tag: &str) -> Option<&'a str> {
    find(node, tag).and_then(text)
}
