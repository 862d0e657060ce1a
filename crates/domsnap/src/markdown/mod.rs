//! Markdown conversion with explicit strategy selection.
//!
//! Two converters implement the same contract: the recursive
//! [`TreeConverter`] (exact) and the [`RegexConverter`] (approximate,
//! non-recursive). Which one ran is always reported via
//! [`ConversionMode`] so callers and tests never have to guess.

mod fallback;
mod title;
mod tree;

pub use fallback::RegexConverter;
pub use title::{ensure_title, FALLBACK_TITLE};
pub use tree::TreeConverter;

use domsnap_core::Node;
#[cfg(not(feature = "html"))]
use tracing::warn;

/// Which converter produced a piece of Markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMode {
    /// Recursive tree conversion, structure-exact
    Tree,
    /// Flat regex substitution, best effort
    Regex,
}

/// A converted document together with the mode that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub markdown: String,
    pub mode: ConversionMode,
}

/// Converter strategy.
#[derive(Debug, Clone, Copy)]
pub enum Converter {
    Tree(TreeConverter),
    Regex(RegexConverter),
}

impl Default for Converter {
    fn default() -> Self {
        Converter::Tree(TreeConverter::new())
    }
}

impl Converter {
    pub fn mode(&self) -> ConversionMode {
        match self {
            Converter::Tree(_) => ConversionMode::Tree,
            Converter::Regex(_) => ConversionMode::Regex,
        }
    }

    /// Convert a node tree. The regex strategy serializes the tree back to
    /// HTML first; it exists so tests and degraded callers can exercise it
    /// against the same inputs.
    pub fn convert_node(&self, node: &Node) -> Conversion {
        match self {
            Converter::Tree(tree) => Conversion {
                markdown: tree.convert(node),
                mode: ConversionMode::Tree,
            },
            Converter::Regex(regex) => Conversion {
                markdown: regex.convert(&node.outer_html()),
                mode: ConversionMode::Regex,
            },
        }
    }
}

/// Entry point used by callers that hold an HTML string rather than a
/// parsed tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownService {
    converter: Converter,
}

impl MarkdownService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_converter(converter: Converter) -> Self {
        Self { converter }
    }

    /// Convert a node tree with the configured strategy.
    pub fn convert_node(&self, node: &Node) -> Conversion {
        self.converter.convert_node(node)
    }

    /// Convert an HTML string.
    ///
    /// With the `html` feature the string is parsed and handed to the
    /// configured strategy; without it there is no DOM backend, so the
    /// regex converter takes over regardless of configuration and the
    /// result is marked [`ConversionMode::Regex`].
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Conversion {
        let node = crate::html::parse_html(html);
        self.converter.convert_node(&node)
    }

    #[cfg(not(feature = "html"))]
    pub fn convert_html(&self, html: &str) -> Conversion {
        warn!("html feature disabled, falling back to regex conversion");
        Conversion {
            markdown: RegexConverter::new().convert(html),
            mode: ConversionMode::Regex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_is_reported() {
        let mut p = Node::element("p");
        p.add_child(Node::text("x"));

        let tree = Converter::default().convert_node(&p);
        assert_eq!(tree.mode, ConversionMode::Tree);

        let regex = Converter::Regex(RegexConverter::new()).convert_node(&p);
        assert_eq!(regex.mode, ConversionMode::Regex);
    }

    #[test]
    fn test_strategies_agree_on_flat_input() {
        let mut p = Node::element("p");
        p.add_child(Node::text("Hello "));
        let mut strong = Node::element("strong");
        strong.add_child(Node::text("world"));
        p.add_child(strong);

        let tree = Converter::Tree(TreeConverter::new()).convert_node(&p);
        let regex = Converter::Regex(RegexConverter::new()).convert_node(&p);

        assert_eq!(tree.markdown.trim(), regex.markdown.trim());
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_convert_html_uses_tree_backend() {
        let service = MarkdownService::new();
        let conversion = service.convert_html("<p>Hello <strong>world</strong></p>");

        assert_eq!(conversion.mode, ConversionMode::Tree);
        assert_eq!(conversion.markdown, "Hello **world**\n\n");
    }
}
