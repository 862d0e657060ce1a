//! domsnap-core - DOM node model and capture statistics
//!
//! This crate provides the data structures shared by the domsnap capture
//! pipeline: the [`Node`] tree that represents a captured DOM subtree, the
//! computed-style snapshots that ride along with source nodes, and the
//! statistics record produced by one capture.
//!
//! # Architecture
//!
//! ```text
//! Browser collaborator ──▶ Node tree (+ StyleSnapshot per node)
//!                              │
//!                              ▼
//!                    domsnap capture pipeline
//!                              │
//!                              ▼
//!                 styled HTML + Markdown + LinkStats
//! ```
//!
//! # Example
//!
//! ```rust
//! use domsnap_core::Node;
//!
//! let mut p = Node::element("p");
//! p.add_child(Node::text("Hello"));
//!
//! assert_eq!(p.outer_html(), "<p>Hello</p>");
//! assert_eq!(p.text_content(), "Hello");
//! ```

mod node;
mod stats;
mod style;

pub use node::{Node, NodeType};
pub use stats::{LinkStats, StyleStats};
pub use style::{PseudoKind, StyleMap, StyleSnapshot};
