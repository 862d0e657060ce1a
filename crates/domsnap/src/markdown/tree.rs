//! Tree-based Markdown conversion.
//!
//! Structural recursion over the node tree, depth-first and left-to-right:
//! a parent's markdown is composed from its already-converted children.
//! Unknown tags pass their children through unchanged, which is what keeps
//! generic containers from swallowing content.

use domsnap_core::{Node, NodeType};

/// The exact, recursive converter. This is the primary strategy; see
/// [`RegexConverter`](super::RegexConverter) for the degraded one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeConverter;

impl TreeConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert a node (and its subtree) to Markdown.
    pub fn convert(&self, node: &Node) -> String {
        match node.node_type {
            NodeType::Text => node.text.clone().unwrap_or_default(),
            NodeType::Element => self.convert_element(node),
        }
    }

    fn convert_children(&self, node: &Node) -> String {
        node.children().map(|child| self.convert(child)).collect()
    }

    fn convert_element(&self, node: &Node) -> String {
        match node.tag_name() {
            tag @ ("h1" | "h2" | "h3" | "h4" | "h5" | "h6") => {
                let level = tag[1..].parse::<usize>().unwrap_or(1);
                format!("{} {}\n\n", "#".repeat(level), self.convert_children(node))
            }

            "p" => format!("{}\n\n", self.convert_children(node)),

            "strong" | "b" => format!("**{}**", self.convert_children(node)),

            "em" | "i" => format!("*{}*", self.convert_children(node)),

            "code" => format!("`{}`", self.convert_children(node)),

            "pre" => format!("\n```\n{}\n```\n\n", self.convert_children(node)),

            "br" => "\n".to_string(),

            "a" => {
                let content = self.convert_children(node);
                match node.attr("href") {
                    Some(href) if !href.is_empty() => format!("[{}]({})", content, href),
                    _ => content,
                }
            }

            "img" => match node.attr("src") {
                Some(src) if !src.is_empty() => {
                    let alt = node.attr("alt").filter(|a| !a.is_empty()).unwrap_or("Image");
                    format!("![{}]({})", alt, src)
                }
                _ => String::new(),
            },

            "ul" => {
                let mut out = String::from("\n");
                for li in node.element_children().filter(|c| c.tag_name() == "li") {
                    out.push_str(&format!("- {}\n", self.convert(li).trim()));
                }
                out.push('\n');
                out
            }

            "ol" => {
                let mut out = String::from("\n");
                for (index, li) in node
                    .element_children()
                    .filter(|c| c.tag_name() == "li")
                    .enumerate()
                {
                    out.push_str(&format!("{}. {}\n", index + 1, self.convert(li).trim()));
                }
                out.push('\n');
                out
            }

            // The list prefix comes from the parent ul/ol.
            "li" => self.convert_children(node),

            "blockquote" => {
                let content = self.convert_children(node);
                format!("\n> {}\n\n", content.trim().replace('\n', "\n> "))
            }

            "table" => self.convert_table(node),

            "thead" | "tbody" | "tfoot" | "tr" | "th" | "td" => self.convert_children(node),

            "div" | "section" | "article" | "main" | "header" | "footer" | "nav" | "aside" => {
                let content = self.convert_children(node);
                if content.is_empty() {
                    String::new()
                } else if content.ends_with("\n\n") {
                    content
                } else {
                    format!("{}\n", content)
                }
            }

            "span" => self.convert_children(node),

            // Raw CSS/JS would leak into the document as text.
            "script" | "style" | "noscript" | "template" => String::new(),

            _ => self.convert_children(node),
        }
    }

    /// Rows come from direct `tr` children or one level inside
    /// `thead`/`tbody`/`tfoot`, in document order. The separator line after
    /// the first row makes the first row the header.
    fn convert_table(&self, table: &Node) -> String {
        let mut rows: Vec<&Node> = Vec::new();
        for child in table.element_children() {
            match child.tag_name() {
                "tr" => rows.push(child),
                "thead" | "tbody" | "tfoot" => {
                    rows.extend(child.element_children().filter(|c| c.tag_name() == "tr"));
                }
                _ => {}
            }
        }

        let mut out = String::from("\n");
        for (row_index, row) in rows.iter().enumerate() {
            let cells: Vec<String> = row
                .element_children()
                .filter(|c| matches!(c.tag_name(), "th" | "td"))
                .map(|cell| {
                    let content = self.convert_children(cell).trim().to_string();
                    if content.is_empty() {
                        " ".to_string()
                    } else {
                        content
                    }
                })
                .collect();

            if cells.is_empty() {
                continue;
            }

            out.push_str(&format!("| {} |\n", cells.join(" | ")));

            if row_index == 0 {
                let separator: Vec<&str> = cells.iter().map(|_| " --- ").collect();
                out.push_str(&format!("|{}|\n", separator.join("|")));
            }
        }
        out.push('\n');
        out
    }
}
