//! Rewrites relative URLs on a captured tree to absolute URLs.
//!
//! A snapshot viewed from disk loses the page's base URL, so every
//! URL-bearing attribute is anchored at the page location the capture was
//! taken from. Resolution is best effort: anything that fails to parse is
//! left untouched and logged.

use domsnap_core::{LinkStats, Node};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;
use url::Url;

/// `url(...)` occurrences inside inline style attributes.
static CSS_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"url\(['"]?([^'")]+)['"]?\)"#).expect("css url pattern"));

/// Lazy-load attributes rewritten in addition to `src`/`href`.
const URL_ATTRIBUTES: &[&str] = &["srcset", "data-src", "data-original", "data-lazy"];

/// Resolves relative URLs against the captured page's location.
pub struct LinkResolver {
    base: Option<Url>,
}

impl LinkResolver {
    /// Create a resolver anchored at `page_url`. An unparsable page URL
    /// disables resolution (every conversion then falls back to the
    /// original value) rather than failing the capture.
    pub fn new(page_url: &str) -> Self {
        let base = match Url::parse(page_url) {
            Ok(url) => Some(url),
            Err(err) => {
                warn!(%page_url, %err, "page URL did not parse, relative links stay relative");
                None
            }
        };
        Self { base }
    }

    /// Does this URL need rewriting?
    ///
    /// The `http` prefix check is intentionally loose (it also matches
    /// `https` and any other string starting with those four letters);
    /// captures produced by earlier versions of the tool relied on it, so
    /// it is kept as-is.
    pub fn needs_conversion(url: &str) -> bool {
        !url.is_empty()
            && !url.starts_with("http")
            && !url.starts_with("data:")
            && !url.starts_with("//")
            && !url.starts_with("mailto:")
            && !url.starts_with("tel:")
            && !url.starts_with('#')
            && !url.starts_with("javascript:")
    }

    /// Resolve `url` against the page location. On failure the original
    /// string comes back unchanged, with a warning.
    pub fn convert_url(&self, url: &str) -> String {
        let Some(base) = &self.base else {
            return url.to_string();
        };
        match base.join(url) {
            Ok(resolved) => resolved.to_string(),
            Err(err) => {
                warn!(%url, %err, "could not resolve URL against page location");
                url.to_string()
            }
        }
    }

    /// Walk the clone once, rewriting every URL-bearing attribute and
    /// counting what was found and converted.
    pub fn resolve(&self, clone: &mut Node) -> LinkStats {
        let mut stats = LinkStats::new();
        self.resolve_node(clone, &mut stats);
        stats
    }

    fn resolve_node(&self, node: &mut Node, stats: &mut LinkStats) {
        if node.is_element() {
            self.resolve_element(node, stats);
        }
        for child in &mut node.children {
            self.resolve_node(child, stats);
        }
    }

    fn resolve_element(&self, node: &mut Node, stats: &mut LinkStats) {
        match node.tag_name() {
            "img" => {
                stats.total_images += 1;
                if let Some(src) = node.attr("src") {
                    if Self::needs_conversion(src) {
                        let absolute = self.convert_url(src);
                        node.set_attr("src", &absolute);
                        stats.converted_images += 1;
                    }
                }
            }
            "a" => {
                stats.total_links += 1;
                if let Some(href) = node.attr("href") {
                    if Self::needs_conversion(href) {
                        let absolute = self.convert_url(href);
                        node.set_attr("href", &absolute);
                        stats.converted_links += 1;
                    }
                }
            }
            _ => {}
        }

        let style = node.attr("style").map(str::to_string);
        if let Some(style) = style {
            if style.contains("url(") {
                let mut replaced = false;
                let updated = CSS_URL.replace_all(&style, |caps: &regex::Captures| {
                    let inner = &caps[1];
                    if Self::needs_conversion(inner) {
                        replaced = true;
                        format!("url('{}')", self.convert_url(inner))
                    } else {
                        caps[0].to_string()
                    }
                });
                if replaced {
                    node.set_attr("style", &updated);
                    stats.has_background_images = true;
                }
            }
        }

        for attr in URL_ATTRIBUTES.iter().copied() {
            let Some(value) = node.attr(attr) else {
                continue;
            };
            if !Self::needs_conversion(value) {
                continue;
            }
            let rewritten = if attr == "srcset" {
                self.convert_srcset(value)
            } else {
                self.convert_url(value)
            };
            node.set_attr(attr, &rewritten);
        }
    }

    /// Rewrite each candidate URL of a `srcset` value, keeping width and
    /// density descriptors verbatim.
    fn convert_srcset(&self, srcset: &str) -> String {
        srcset
            .split(',')
            .map(|candidate| {
                let mut parts = candidate.split_whitespace();
                let Some(candidate_url) = parts.next() else {
                    return String::new();
                };
                let resolved = if Self::needs_conversion(candidate_url) {
                    self.convert_url(candidate_url)
                } else {
                    candidate_url.to_string()
                };
                let descriptors: Vec<&str> = parts.collect();
                if descriptors.is_empty() {
                    resolved
                } else {
                    format!("{} {}", resolved, descriptors.join(" "))
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> LinkResolver {
        LinkResolver::new("https://site.example/dir/page.html")
    }

    #[test]
    fn test_needs_conversion() {
        assert!(!LinkResolver::needs_conversion("https://x.com/a"));
        assert!(!LinkResolver::needs_conversion("http://x.com/a"));
        assert!(!LinkResolver::needs_conversion("data:image/png;base64,AAAA"));
        assert!(!LinkResolver::needs_conversion("//cdn.example/a.js"));
        assert!(!LinkResolver::needs_conversion("mailto:a@b.c"));
        assert!(!LinkResolver::needs_conversion("tel:+123"));
        assert!(!LinkResolver::needs_conversion("#frag"));
        assert!(!LinkResolver::needs_conversion("javascript:void(0)"));
        assert!(!LinkResolver::needs_conversion(""));

        assert!(LinkResolver::needs_conversion("/a/b"));
        assert!(LinkResolver::needs_conversion("photo.png"));
        assert!(LinkResolver::needs_conversion("../up.html"));
    }

    #[test]
    fn test_loose_http_prefix_is_kept() {
        // Compatibility with previously captured output: any string
        // starting with the four letters "http" counts as absolute.
        assert!(!LinkResolver::needs_conversion("httpfoo"));
    }

    #[test]
    fn test_img_src_resolution() {
        let mut img = Node::element_with_attrs("img", &[("src", "photo.png")]);
        let stats = resolver().resolve(&mut img);

        assert_eq!(img.attr("src"), Some("https://site.example/dir/photo.png"));
        assert_eq!(stats.total_images, 1);
        assert_eq!(stats.converted_images, 1);
    }

    #[test]
    fn test_absolute_img_is_counted_not_converted() {
        let mut img = Node::element_with_attrs("img", &[("src", "https://cdn.example/a.png")]);
        let stats = resolver().resolve(&mut img);

        assert_eq!(img.attr("src"), Some("https://cdn.example/a.png"));
        assert_eq!(stats.total_images, 1);
        assert_eq!(stats.converted_images, 0);
    }

    #[test]
    fn test_link_href_resolution() {
        let mut root = Node::element("div");
        let mut a = Node::element_with_attrs("a", &[("href", "/about")]);
        a.add_child(Node::text("About"));
        root.add_child(a);

        let stats = resolver().resolve(&mut root);

        assert_eq!(
            root.children[0].attr("href"),
            Some("https://site.example/about")
        );
        assert_eq!(stats.total_links, 1);
        assert_eq!(stats.converted_links, 1);
    }

    #[test]
    fn test_css_background_url() {
        let mut div = Node::element_with_attrs(
            "div",
            &[("style", "background-image: url('images/bg.png'); color: red")],
        );
        let stats = resolver().resolve(&mut div);

        assert_eq!(
            div.attr("style"),
            Some("background-image: url('https://site.example/dir/images/bg.png'); color: red")
        );
        assert!(stats.has_background_images);
    }

    #[test]
    fn test_absolute_css_url_untouched() {
        let style = "background: url(https://cdn.example/bg.png)";
        let mut div = Node::element_with_attrs("div", &[("style", style)]);
        let stats = resolver().resolve(&mut div);

        assert_eq!(div.attr("style"), Some(style));
        assert!(!stats.has_background_images);
    }

    #[test]
    fn test_srcset_descriptors_preserved() {
        let mut img = Node::element_with_attrs(
            "img",
            &[("src", "a.png"), ("srcset", "a.png 1x, b.png 2x, https://cdn.example/c.png 480w")],
        );
        resolver().resolve(&mut img);

        assert_eq!(
            img.attr("srcset"),
            Some(
                "https://site.example/dir/a.png 1x, https://site.example/dir/b.png 2x, \
                 https://cdn.example/c.png 480w"
            )
        );
    }

    #[test]
    fn test_lazy_load_attributes() {
        let mut img = Node::element_with_attrs(
            "img",
            &[("src", "x.png"), ("data-src", "lazy.png"), ("data-original", "orig.png")],
        );
        resolver().resolve(&mut img);

        assert_eq!(
            img.attr("data-src"),
            Some("https://site.example/dir/lazy.png")
        );
        assert_eq!(
            img.attr("data-original"),
            Some("https://site.example/dir/orig.png")
        );
    }

    #[test]
    fn test_unparsable_base_leaves_urls_alone() {
        let resolver = LinkResolver::new("not a url");
        let mut img = Node::element_with_attrs("img", &[("src", "photo.png")]);
        let stats = resolver.resolve(&mut img);

        assert_eq!(img.attr("src"), Some("photo.png"));
        // Still counted: the element was seen and a conversion attempted.
        assert_eq!(stats.total_images, 1);
        assert_eq!(stats.converted_images, 1);
    }
}
