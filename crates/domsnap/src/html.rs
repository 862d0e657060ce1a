//! HTML parsing support.
//!
//! This module converts HTML strings into the `Node` tree the capture
//! pipeline works on. It exists for callers whose collaborator hands over
//! serialized HTML instead of an already-built tree, and for tests.

use scraper::{ElementRef, Html, Node as ScraperNode};

use domsnap_core::Node;

/// Parse an HTML string into a Node tree.
///
/// The returned node is the fragment root (an `html` element), whose
/// children are the parsed content.
///
/// # Example
///
/// ```rust
/// use domsnap::{parse_html, TreeConverter};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
/// let markdown = TreeConverter::new().convert(&node);
/// assert!(markdown.contains("# Hello *World*"));
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();

    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(tag, &attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
