//! Copies significant computed styles from a source tree onto its clone.
//!
//! The source and clone are walked in lock-step. The clone is a structural
//! copy taken before any mutation, so corresponding nodes line up; pseudo
//! spans are inserted only after a node's children have been visited so the
//! pairing never shifts mid-walk.

use domsnap_core::{Node, PseudoKind, StyleMap, StyleStats};
use tracing::warn;

use super::{SignificanceTable, ANIMATION_PROPERTIES, IMPORTANT_PROPERTIES, PSEUDO_PROPERTIES};
use crate::capture::StylesheetScan;

/// Writes inline `style` attributes onto a cloned tree based on the
/// computed-style snapshots carried by the source tree.
pub struct StyleInliner<'a> {
    table: &'a SignificanceTable,
}

impl<'a> StyleInliner<'a> {
    pub fn new(table: &'a SignificanceTable) -> Self {
        Self { table }
    }

    /// Inline significant styles from `source` onto `clone` and inject the
    /// stylesheet scan's `@keyframes` rules as a leading `<style>` block.
    ///
    /// Never fails: malformed per-node data is logged and skipped, and a
    /// source without snapshots simply leaves the clone unstyled.
    pub fn inline(&self, source: &Node, clone: &mut Node, scan: &StylesheetScan) -> StyleStats {
        let mut stats = StyleStats::default();
        self.inline_node(source, clone, &mut stats);

        if scan.skipped_sheets > 0 {
            warn!(
                skipped = scan.skipped_sheets,
                "cross-origin stylesheets were not scanned for keyframes"
            );
        }

        if !scan.keyframes.is_empty() {
            let mut style = Node::element("style");
            style.add_child(Node::text(&format!("\n{}\n", scan.keyframes.join("\n"))));
            clone.prepend_child(style);
            stats.has_keyframes = true;
        }

        stats
    }

    fn inline_node(&self, source: &Node, clone: &mut Node, stats: &mut StyleStats) {
        if source.is_element() {
            self.apply_inline_style(source, clone, stats);
        }

        if source.children.len() == clone.children.len() {
            for (src_child, clone_child) in source.children.iter().zip(clone.children.iter_mut()) {
                self.inline_node(src_child, clone_child, stats);
            }
        } else {
            warn!(
                tag = source.tag_name(),
                "source and clone children diverged, leaving subtree unstyled"
            );
        }

        if source.is_element() {
            // Pseudo spans go in after the child walk so indices stay paired.
            if let Some(snapshot) = source.snapshot.as_deref() {
                for kind in PseudoKind::ALL {
                    if let Some(styles) = snapshot.pseudo(kind) {
                        if let Some(span) = self.synthesize_pseudo(kind, styles, source.tag_name())
                        {
                            match kind {
                                PseudoKind::Before => clone.prepend_child(span),
                                PseudoKind::After => clone.add_child(span),
                            }
                            stats.pseudo_elements += 1;
                        }
                    }
                }
            }

            // Fidelity now lives in the style attribute; page-specific
            // selectors must not leak into the snapshot.
            clone.remove_attr("class");
            clone.remove_attr("id");
        }
    }

    fn apply_inline_style(&self, source: &Node, clone: &mut Node, stats: &mut StyleStats) {
        let Some(snapshot) = source.snapshot.as_deref() else {
            return;
        };

        let tag = source.tag_name();
        let mut declarations = Vec::new();

        for property in IMPORTANT_PROPERTIES {
            if let Some(value) = snapshot.base.get(property) {
                if self.table.is_significant(property, value, tag) {
                    declarations.push(format!("{property}: {value}"));
                }
            }
        }

        let animation = animation_declarations(&snapshot.base);
        if !animation.is_empty() {
            declarations.extend(animation);
            stats.animated_elements += 1;
        }

        if !declarations.is_empty() {
            clone.set_attr("style", &declarations.join("; "));
            stats.styled_elements += 1;
        }
    }

    /// Turn a `::before`/`::after` snapshot into a real span so it survives
    /// serialization. Returns `None` when the pseudo-element renders no
    /// content.
    fn synthesize_pseudo(&self, kind: PseudoKind, styles: &StyleMap, tag: &str) -> Option<Node> {
        let content = styles.get("content")?;
        if content.is_empty() || matches!(content, "none" | "normal" | "\"\"" | "''") {
            return None;
        }

        let mut span = Node::element("span");
        span.set_attr("data-pseudo", kind.marker());

        let mut declarations = Vec::new();
        for property in PSEUDO_PROPERTIES {
            if let Some(value) = styles.get(property) {
                if self.table.is_significant(property, value, tag) {
                    declarations.push(format!("{property}: {value}"));
                }
            }
        }
        if !declarations.is_empty() {
            span.set_attr("style", &declarations.join("; "));
        }

        span.add_child(Node::text(unquote(content)));
        Some(span)
    }
}

fn animation_declarations(styles: &StyleMap) -> Vec<String> {
    ANIMATION_PROPERTIES
        .iter()
        .filter_map(|property| {
            let value = styles.get(property)?;
            if value.is_empty() || matches!(value, "none" | "all 0s ease 0s" | "0s") {
                None
            } else {
                Some(format!("{property}: {value}"))
            }
        })
        .collect()
}

/// Strip one leading and one trailing quote, matching how `content` values
/// are serialized by the browser.
fn unquote(content: &str) -> &str {
    let s = content
        .strip_prefix('"')
        .or_else(|| content.strip_prefix('\''))
        .unwrap_or(content);
    s.strip_suffix('"')
        .or_else(|| s.strip_suffix('\''))
        .unwrap_or(s)
}
