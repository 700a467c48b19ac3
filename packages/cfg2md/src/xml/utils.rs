//! XML utility functions for navigating and extracting data from DOM trees.

use std::fs;
use std::path::Path;

use roxmltree::Node;

use crate::error::DecodeError;

/// Read a metadata file as text, dropping a leading byte-order mark.
pub fn read_source(path: &Path) -> Result<String, DecodeError> {
    let text = fs::read_to_string(path)?;
    Ok(match text.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use onec_cfg2md::xml::get_tag_name;
///
/// let xml = r#"<v8:item xmlns:v8="http://v8.1c.ru/8.1/data/core"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "item");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given local name, in any namespace.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Check if a node is an element with the given namespace and local name.
pub fn has_tag_ns(node: Node<'_, '_>, ns: &str, tag: &str) -> bool {
    node.is_element() && node.has_tag_name((ns, tag))
}

/// Find the first child element with the given local name, in any namespace.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use onec_cfg2md::xml::find_child;
///
/// let xml = r#"<root><name>A</name><synonym/></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let root = doc.root_element();
///
/// assert!(find_child(root, "synonym").is_some());
/// assert!(find_child(root, "missing").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// Find all child elements with the given local name, in any namespace.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_tag(*child, tag))
}

/// Find the first child element with the given namespace and local name.
pub fn find_child_ns<'a, 'input>(
    node: Node<'a, 'input>,
    ns: &str,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag_ns(*child, ns, tag))
}

/// Find all child elements with the given namespace and local name.
pub fn find_children_ns<'a, 'input>(
    node: Node<'a, 'input>,
    ns: &'a str,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_tag_ns(*child, ns, tag))
}

/// Get the text content of a node, trimmed.
///
/// Returns an empty string if the node has no text.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Get the trimmed text of the first child with the given local name.
///
/// Returns an empty string if the child is absent.
pub fn child_text(node: Node<'_, '_>, tag: &str) -> String {
    find_child(node, tag).map(get_text).unwrap_or_default()
}

/// Get the trimmed text of the first namespaced child.
///
/// Returns an empty string if the child is absent.
pub fn child_text_ns(node: Node<'_, '_>, ns: &str, tag: &str) -> String {
    find_child_ns(node, ns, tag).map(get_text).unwrap_or_default()
}

/// Get all element children of a node.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}
