//! Standalone HTML document rendering.
//!
//! A capture's HTML fragment is self-contained visually, but the file the
//! persistence collaborator writes should open as a page of its own: meta
//! charset, a header panel describing where the element came from, and the
//! element itself below. Everything interpolated into the shell is escaped
//! here; the fragment itself already carries its own markup.

use domsnap_core::LinkStats;

use crate::capture::{CaptureResult, PageContext};

/// Escape text for interpolation into HTML.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escape an optional field, showing a placeholder when missing.
fn escape_field(input: Option<&str>) -> String {
    match input {
        Some(value) if !value.is_empty() => escape_html(value),
        _ => "N/A".to_string(),
    }
}

fn link_summary(stats: &LinkStats) -> String {
    let mut summary = format!(
        "Images: {} | Links: {}",
        stats.total_images, stats.total_links
    );
    if stats.has_background_images {
        summary.push_str(" | background images");
    }
    summary
}

fn style_summary(stats: &LinkStats) -> String {
    let mut summary = format!("{} elements with inline styles", stats.styled_elements);
    if stats.pseudo_elements > 0 {
        summary.push_str(&format!(" | {} pseudo-elements", stats.pseudo_elements));
    }
    if stats.animated_elements > 0 {
        summary.push_str(&format!(" | {} animated elements", stats.animated_elements));
    }
    if stats.has_keyframes {
        summary.push_str(" | keyframe animations");
    }
    summary
}

/// Wrap a capture into a standalone HTML page with an info panel.
pub fn render_document(result: &CaptureResult, page: &PageContext, root_tag: &str) -> String {
    let url = escape_field(Some(page.url.as_str()));
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Captured DOM Element - {tag}</title>
  <style>
    body {{
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      margin: 0;
      padding: 20px;
      background-color: #f5f5f5;
    }}
    .info-panel {{
      background: white;
      padding: 20px;
      border-radius: 8px;
      margin-bottom: 20px;
      box-shadow: 0 2px 10px rgba(0,0,0,0.1);
    }}
    .info-item {{
      margin: 8px 0;
      padding: 8px 0;
      border-bottom: 1px solid #eee;
    }}
    .info-label {{
      font-weight: 600;
      color: #555;
      display: inline-block;
      width: 120px;
    }}
    .info-value {{
      color: #333;
      word-break: break-all;
    }}
    .captured-element {{
      background: white;
      padding: 20px;
      border-radius: 8px;
      box-shadow: 0 2px 10px rgba(0,0,0,0.1);
    }}
  </style>
</head>
<body>
  <div class="info-panel">
    <h2>Element info</h2>
    <div class="info-item">
      <span class="info-label">Tag:</span>
      <span class="info-value">{tag}</span>
    </div>
    <div class="info-item">
      <span class="info-label">Source URL:</span>
      <span class="info-value"><a href="{url}" target="_blank">{url}</a></span>
    </div>
    <div class="info-item">
      <span class="info-label">Text preview:</span>
      <span class="info-value">{preview}</span>
    </div>
    <div class="info-item">
      <span class="info-label">Link stats:</span>
      <span class="info-value">{links}</span>
    </div>
    <div class="info-item">
      <span class="info-label">Style stats:</span>
      <span class="info-value">{styles}</span>
    </div>
  </div>

  <div class="captured-element">
{fragment}
  </div>
</body>
</html>"#,
        tag = escape_field(Some(root_tag)),
        url = url,
        preview = escape_field(page.text_preview.as_deref()),
        links = link_summary(&result.stats),
        styles = style_summary(&result.stats),
        fragment = result.html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{capture, CaptureOptions, StylesheetScan};
    use domsnap_core::Node;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#039;"
        );
    }

    #[test]
    fn test_missing_fields_show_placeholder() {
        assert_eq!(escape_field(None), "N/A");
        assert_eq!(escape_field(Some("")), "N/A");
        assert_eq!(escape_field(Some("x")), "x");
    }

    #[test]
    fn test_render_document() {
        let mut root = Node::element("div");
        root.add_child(Node::text("content"));
        let page = crate::capture::PageContext::new("https://site.example/page?a=1&b=2")
            .with_text_preview("content");

        let result = capture(&root, &page, &StylesheetScan::default(), &CaptureOptions::default());
        let document = render_document(&result, &page, "div");

        assert!(document.starts_with("<!DOCTYPE html>"));
        // Query string ampersand must be escaped in the info panel.
        assert!(document.contains("https://site.example/page?a=1&amp;b=2"));
        assert!(document.contains("<div>content</div>"));
        assert!(document.contains("Images: 0 | Links: 0"));
        assert!(document.contains("0 elements with inline styles"));
    }
}
