//! # domsnap
//!
//! Capture DOM elements as styled HTML snapshots and Markdown.
//!
//! Given a DOM subtree captured by an embedding collaborator (with computed
//! styles attached to each source node), this crate:
//!
//! - inlines every significant computed style onto a clone of the tree,
//!   including synthesized `::before`/`::after` pseudo-elements and
//!   `@keyframes` rules,
//! - rewrites relative URLs (`src`, `href`, `srcset`, lazy-load `data-*`
//!   attributes, CSS `url(...)`) to absolute URLs anchored at the page,
//! - converts the finished tree to Markdown, guaranteeing a leading `# `
//!   title,
//! - reports per-capture statistics.
//!
//! The picker UI, file storage and transport are deliberately out of scope;
//! this crate consumes and produces plain data.
//!
//! ## Example
//!
//! ```rust
//! use domsnap::{capture, CaptureOptions, Node, PageContext, StylesheetScan};
//!
//! let mut p = Node::element("p");
//! p.add_child(Node::text("Hello World"));
//!
//! let page = PageContext::new("https://example.com/docs/page.html");
//! let result = capture(&p, &page, &StylesheetScan::default(), &CaptureOptions::default());
//!
//! assert!(result.markdown.contains("Hello World"));
//! assert!(result.markdown.starts_with("# "));
//! ```
//!
//! ## Design
//!
//! All processing is single-threaded and synchronous over one subtree per
//! capture. The source tree is cloned before any mutation begins, so the
//! inliner reads computed styles from the source while writing onto the
//! clone (clone-then-walk). Per-node failures are logged and skipped; the
//! public entry points never panic and never propagate errors.

pub mod capture;
pub mod document;
#[cfg(feature = "html")]
pub mod html;
pub mod links;
pub mod markdown;
pub mod style;

pub use capture::{
    capture, try_capture, CaptureOptions, CaptureResult, CaptureSession, PageContext,
    StylesheetScan,
};
pub use document::render_document;
pub use domsnap_core::{LinkStats, Node, NodeType, PseudoKind, StyleMap, StyleSnapshot, StyleStats};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use links::LinkResolver;
pub use markdown::{
    ensure_title, Conversion, ConversionMode, Converter, MarkdownService, RegexConverter,
    TreeConverter,
};
pub use style::{SignificanceTable, StyleInliner};

/// Error type for domsnap operations
#[derive(Debug, thiserror::Error)]
pub enum SnapError {
    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SnapError>;
