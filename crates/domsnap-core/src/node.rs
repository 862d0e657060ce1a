//! DOM node structure for the capture pipeline.
//!
//! The embedding collaborator (a browser extension, a CDP client, an HTML
//! parser) converts its DOM into this structure. The capture pipeline then
//! works on plain data and never talks to a live DOM.

use crate::style::StyleSnapshot;

/// Node kinds. Only elements and text survive capture; comments and other
/// node types are dropped by the collaborator that builds the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Element,
    Text,
}

/// A node in a captured DOM subtree.
///
/// Invariant: text nodes carry `text` and have no attributes and no
/// children; the constructors enforce this shape.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node kind
    pub node_type: NodeType,

    /// Lowercase tag name for elements, `"#text"` for text nodes
    pub tag: String,

    /// Text content for text nodes
    pub text: Option<String>,

    /// Attributes in document order
    pub attributes: Vec<(String, String)>,

    /// Child nodes in document order
    pub children: Vec<Node>,

    /// Computed-style snapshot taken at capture time. Present only on
    /// source trees; clones never carry snapshots.
    pub snapshot: Option<Box<StyleSnapshot>>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            tag: tag_name.to_lowercase(),
            text: None,
            attributes: Vec::new(),
            children: Vec::new(),
            snapshot: None,
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: &[(&str, &str)]) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            tag: "#text".to_string(),
            text: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
            snapshot: None,
        }
    }

    /// Attach a computed-style snapshot to this node
    pub fn with_snapshot(mut self, snapshot: StyleSnapshot) -> Self {
        self.snapshot = Some(Box::new(snapshot));
        self
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing an existing value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        for (k, v) in &mut self.attributes {
            if k.eq_ignore_ascii_case(name) {
                *v = value.to_string();
                return;
            }
        }
        self.attributes.push((name.to_string(), value.to_string()));
    }

    /// Remove an attribute if present
    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    }

    /// Iterate over all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Iterate over element children only
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|n| n.is_element())
    }

    /// Append a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Insert a child node at the front
    pub fn prepend_child(&mut self, child: Node) {
        self.children.insert(0, child);
    }

    /// Deep copy of the tree shape without style snapshots.
    ///
    /// The capture pipeline clones the source before any mutation so the
    /// inliner can read snapshots from the source while writing inline
    /// styles onto the clone.
    pub fn structural_clone(&self) -> Node {
        Node {
            node_type: self.node_type,
            tag: self.tag.clone(),
            text: self.text.clone(),
            attributes: self.attributes.clone(),
            children: self.children.iter().map(Node::structural_clone).collect(),
            snapshot: None,
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.text.clone().unwrap_or_default(),
            NodeType::Element => self
                .children()
                .map(Node::text_content)
                .collect::<Vec<_>>()
                .join(""),
        }
    }

    /// Reconstruct outer HTML
    pub fn outer_html(&self) -> String {
        match self.node_type {
            NodeType::Text => self.text.clone().unwrap_or_default(),
            NodeType::Element => {
                let tag = self.tag_name();
                let attrs = self.attributes_string();

                if self.is_void_element() {
                    if attrs.is_empty() {
                        format!("<{}>", tag)
                    } else {
                        format!("<{} {}>", tag, attrs)
                    }
                } else {
                    let inner = self.inner_html();
                    if attrs.is_empty() {
                        format!("<{}>{}</{}>", tag, inner, tag)
                    } else {
                        format!("<{} {}>{}</{}>", tag, attrs, inner, tag)
                    }
                }
            }
        }
    }

    /// Reconstruct inner HTML
    pub fn inner_html(&self) -> String {
        self.children()
            .map(Node::outer_html)
            .collect::<Vec<_>>()
            .join("")
    }

    /// Get attributes as a string for HTML output
    fn attributes_string(&self) -> String {
        let mut result = Vec::new();
        for (name, value) in &self.attributes {
            if value.is_empty() {
                result.push(name.clone());
            } else {
                result.push(format!("{}=\"{}\"", name, escape_html_attr(value)));
            }
        }
        result.join(" ")
    }

    /// Check if this is a void element
    fn is_void_element(&self) -> bool {
        const VOID_ELEMENTS: &[&str] = &[
            "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen",
            "link", "meta", "param", "source", "track", "wbr",
        ];
        VOID_ELEMENTS.contains(&self.tag_name())
    }
}

/// Escape HTML attribute value
fn escape_html_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleMap, StyleSnapshot};

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "div");
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert!(node.children.is_empty());
        assert!(node.attributes.is_empty());
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_attributes() {
        let mut node =
            Node::element_with_attrs("a", &[("href", "https://example.com"), ("title", "Example")]);
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("TITLE"), Some("Example"));
        assert_eq!(node.attr("class"), None);

        node.set_attr("href", "/other");
        assert_eq!(node.attr("href"), Some("/other"));

        node.remove_attr("title");
        assert!(!node.has_attr("title"));
    }

    #[test]
    fn test_children() {
        let mut parent = Node::element("div");
        parent.add_child(Node::text("Hello"));
        parent.add_child(Node::element("span"));
        parent.add_child(Node::text("World"));

        assert_eq!(parent.children().count(), 3);
        assert_eq!(parent.element_children().count(), 1);
    }

    #[test]
    fn test_prepend_child() {
        let mut parent = Node::element("div");
        parent.add_child(Node::text("second"));
        parent.prepend_child(Node::text("first"));

        assert_eq!(parent.text_content(), "firstsecond");
    }

    #[test]
    fn test_structural_clone_drops_snapshots() {
        let mut styles = StyleMap::new();
        styles.insert("color", "rgb(255, 0, 0)");

        let mut div = Node::element("div").with_snapshot(StyleSnapshot {
            base: styles,
            ..Default::default()
        });
        div.add_child(Node::text("x"));

        let clone = div.structural_clone();
        assert!(div.snapshot.is_some());
        assert!(clone.snapshot.is_none());
        assert_eq!(clone.text_content(), "x");
    }

    #[test]
    fn test_outer_html() {
        let mut a = Node::element_with_attrs("a", &[("href", "https://example.com")]);
        a.add_child(Node::text("Link"));

        assert_eq!(a.outer_html(), "<a href=\"https://example.com\">Link</a>");
    }

    #[test]
    fn test_outer_html_escapes_attributes() {
        let img = Node::element_with_attrs("img", &[("alt", "a \"b\" <c>")]);
        assert_eq!(img.outer_html(), "<img alt=\"a &quot;b&quot; &lt;c&gt;\">");
    }

    #[test]
    fn test_void_element_html() {
        let br = Node::element("br");
        assert_eq!(br.outer_html(), "<br>");

        let img = Node::element_with_attrs("img", &[("src", "test.png"), ("alt", "Test")]);
        assert_eq!(img.outer_html(), "<img src=\"test.png\" alt=\"Test\">");
    }
}
