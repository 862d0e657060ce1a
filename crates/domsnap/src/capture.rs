//! Capture orchestration: clone, inline, resolve, convert.

use domsnap_core::{LinkStats, Node};
use tracing::warn;

use crate::links::LinkResolver;
use crate::markdown::{ensure_title, ConversionMode, Converter};
use crate::style::{SignificanceTable, StyleInliner};
use crate::{Result, SnapError};

/// Where and what the capture was taken from. Supplied by the embedding
/// collaborator alongside the element tree.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// The page's current location; base for URL resolution
    pub url: String,

    /// Document title, if any
    pub title: Option<String>,

    /// Short plain-text preview of the captured element
    pub text_preview: Option<String>,
}

impl PageContext {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            title: None,
            text_preview: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_text_preview(mut self, text: &str) -> Self {
        self.text_preview = Some(text.to_string());
        self
    }
}

/// What the collaborator found while scanning the page's stylesheets:
/// serialized `@keyframes` rule texts from same-origin sheets, plus how
/// many cross-origin sheets could not be read.
#[derive(Debug, Clone, Default)]
pub struct StylesheetScan {
    pub keyframes: Vec<String>,
    pub skipped_sheets: usize,
}

impl StylesheetScan {
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }
}

/// Options for one capture.
#[derive(Debug, Clone, Default)]
pub struct CaptureOptions {
    /// Layout-default table for the significance filter
    pub significance: SignificanceTable,

    /// Markdown conversion strategy
    pub converter: Converter,
}

/// Everything one capture produces. Owned by the caller; the pipeline
/// retains nothing across captures.
#[derive(Debug, Clone)]
pub struct CaptureResult {
    /// The styled, link-resolved element serialized to HTML
    pub html: String,

    /// Markdown document with a guaranteed `# ` title
    pub markdown: String,

    /// Link and style statistics for the capture's metadata record
    pub stats: LinkStats,

    /// Which Markdown strategy ran
    pub mode: ConversionMode,
}

impl CaptureResult {
    fn empty(mode: ConversionMode) -> Self {
        Self {
            html: String::new(),
            markdown: String::new(),
            stats: LinkStats::new(),
            mode,
        }
    }
}

/// Guard owned by the capture collaborator to prevent a second capture
/// from starting while one is in flight. Replaces the ambient
/// "already injected" global the browser side would otherwise need.
#[derive(Debug, Default)]
pub struct CaptureSession {
    active: bool,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to start a capture. Returns false when one is already active.
    pub fn begin(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        true
    }

    /// Mark the active capture as finished.
    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Run the full pipeline on a captured element.
///
/// Clone first, then walk: the inliner reads computed styles from `root`
/// while writing onto the clone, so the source is never mutated and the
/// two trees stay index-aligned.
pub fn try_capture(
    root: &Node,
    page: &PageContext,
    scan: &StylesheetScan,
    options: &CaptureOptions,
) -> Result<CaptureResult> {
    if !root.is_element() {
        return Err(SnapError::InvalidInput(
            "capture root must be an element node".to_string(),
        ));
    }

    let mut clone = root.structural_clone();

    let inliner = StyleInliner::new(&options.significance);
    let style_stats = inliner.inline(root, &mut clone, scan);

    let resolver = LinkResolver::new(&page.url);
    let mut stats = resolver.resolve(&mut clone);
    stats.merge_styles(style_stats);

    let html = clone.outer_html();

    let conversion = options.converter.convert_node(&clone);
    let markdown = ensure_title(
        &conversion.markdown,
        page.title.as_deref(),
        page.text_preview.as_deref(),
        Some(&page.url),
    )
    .trim()
    .to_string();

    Ok(CaptureResult {
        html,
        markdown,
        stats,
        mode: conversion.mode,
    })
}

/// Like [`try_capture`], but never fails: invalid input degrades to an
/// empty result so the capture pipeline stays non-blocking for the UI.
pub fn capture(
    root: &Node,
    page: &PageContext,
    scan: &StylesheetScan,
    options: &CaptureOptions,
) -> CaptureResult {
    try_capture(root, page, scan, options).unwrap_or_else(|err| {
        warn!(%err, "capture degraded to an empty result");
        CaptureResult::empty(options.converter.mode())
    })
}
