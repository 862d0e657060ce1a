//! Guarantees a Markdown document carries a top-level heading.

use url::Url;

/// Placeholder when nothing better is available.
pub const FALLBACK_TITLE: &str = "Captured content";

/// Element text longer than this is a paragraph, not a title.
const MAX_TITLE_LENGTH_FROM_CONTENT: usize = 60;

/// Prepend a `# ` heading unless the document already has one.
///
/// Title candidates, in order: the page title, the element's own text when
/// it is short enough to read as a title, the page URL's host, and finally
/// [`FALLBACK_TITLE`]. A page URL that does not parse falls through
/// silently.
pub fn ensure_title(
    markdown: &str,
    page_title: Option<&str>,
    element_text: Option<&str>,
    page_url: Option<&str>,
) -> String {
    if markdown.contains("# ") {
        return markdown.to_string();
    }

    let title = pick_title(page_title, element_text, page_url);
    format!("# {}\n\n{}", title, markdown)
}

fn pick_title(
    page_title: Option<&str>,
    element_text: Option<&str>,
    page_url: Option<&str>,
) -> String {
    if let Some(title) = page_title {
        let trimmed = title.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    if let Some(text) = element_text {
        if !text.is_empty() && text.chars().count() < MAX_TITLE_LENGTH_FROM_CONTENT {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    if let Some(page_url) = page_url {
        if let Ok(url) = Url::parse(page_url) {
            if let Some(host) = url.host_str() {
                return host.to_string();
            }
        }
    }

    FALLBACK_TITLE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_heading_untouched() {
        let markdown = "# Already titled\n\nBody";
        assert_eq!(
            ensure_title(markdown, Some("Page"), None, None),
            markdown
        );
    }

    #[test]
    fn test_page_title_wins() {
        let result = ensure_title("Body", Some("  Page Title  "), Some("short text"), None);
        assert_eq!(result, "# Page Title\n\nBody");
    }

    #[test]
    fn test_short_element_text_second() {
        let result = ensure_title("Body", None, Some("Short label"), None);
        assert_eq!(result, "# Short label\n\nBody");
    }

    #[test]
    fn test_long_element_text_skipped() {
        let long = "x".repeat(80);
        let result = ensure_title("Body", None, Some(&long), Some("https://site.example/p"));
        assert_eq!(result, "# site.example\n\nBody");
    }

    #[test]
    fn test_hostname_third() {
        let result = ensure_title("Body", None, None, Some("https://docs.example.com/a/b"));
        assert_eq!(result, "# docs.example.com\n\nBody");
    }

    #[test]
    fn test_fallback_on_unparsable_url() {
        let result = ensure_title("Body", None, None, Some("::::"));
        assert_eq!(result, format!("# {}\n\nBody", FALLBACK_TITLE));
    }

    #[test]
    fn test_fallback_when_nothing_available() {
        let result = ensure_title("Body", None, None, None);
        assert!(result.starts_with("# Captured content\n\n"));
    }

    #[test]
    fn test_always_exactly_one_leading_heading() {
        let result = ensure_title("plain body", None, None, None);
        assert!(result.starts_with("# "));
        assert_eq!(result.matches("# ").count(), 1);
    }
}
