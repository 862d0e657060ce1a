//! Decides whether a computed style value differs meaningfully from the
//! default rendering for that element/property pair.

use indexmap::IndexMap;

/// Generic keywords that never carry styling information on their own.
const GENERIC_KEYWORDS: &[&str] = &["auto", "none", "normal", "initial", "unset", "inherit"];

/// Block-level tags for which `display: block` is the default.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "div", "dl", "dd", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "ul",
];

/// Inline tags for which `display: inline` is the default.
const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "cite", "code", "em", "i", "kbd", "mark", "q", "s",
    "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var",
];

/// How a property's value is compared against its layout default.
#[derive(Debug, Clone)]
enum DefaultCheck {
    /// Insignificant when the value equals any of these strings
    EqualsAny(Vec<String>),
    /// Insignificant when the value contains this substring
    Contains(String),
}

/// Configurable table of layout defaults.
///
/// The entries are approximations of browser defaults and drift across
/// engines and versions; callers targeting a specific engine can replace
/// them via [`SignificanceTable::set_default`]. The [`Default`] impl ships
/// the Chromium-flavored values the capture tool was tuned against.
#[derive(Debug, Clone)]
pub struct SignificanceTable {
    checks: IndexMap<String, DefaultCheck>,
}

impl Default for SignificanceTable {
    fn default() -> Self {
        let mut table = Self::empty();

        for property in [
            "margin",
            "margin-top",
            "margin-right",
            "margin-bottom",
            "margin-left",
            "padding",
            "padding-top",
            "padding-right",
            "padding-bottom",
            "padding-left",
            "border-width",
            "border-radius",
        ] {
            table.set_default(property, "0px");
        }

        table.set_defaults("border", &["0px none rgb(0, 0, 0)", "medium none currentcolor"]);
        table.set_default("opacity", "1");
        table.set_default("font-weight", "400");
        table.set_default("text-align", "start");
        table.set_default("text-decoration", "none solid rgb(0, 0, 0)");
        table.set_default("position", "static");
        table.set_default("color", "rgb(0, 0, 0)");
        table.set_default("transform", "matrix(1, 0, 0, 1, 0, 0)");
        table.set_contains("background", "rgba(0, 0, 0, 0)");
        table.set_contains("background-color", "rgba(0, 0, 0, 0)");

        table
    }
}

impl SignificanceTable {
    /// Table with no layout defaults; only the generic keywords and the
    /// `display` special case apply.
    pub fn empty() -> Self {
        Self {
            checks: IndexMap::new(),
        }
    }

    /// Declare a single default value for a property
    pub fn set_default(&mut self, property: &str, value: &str) {
        self.set_defaults(property, &[value]);
    }

    /// Declare multiple equivalent default values for a property
    pub fn set_defaults(&mut self, property: &str, values: &[&str]) {
        self.checks.insert(
            property.to_lowercase(),
            DefaultCheck::EqualsAny(values.iter().map(|v| (*v).to_string()).collect()),
        );
    }

    /// Declare a substring that marks a value as default (transparent
    /// backgrounds serialize with the alpha channel embedded mid-value)
    pub fn set_contains(&mut self, property: &str, needle: &str) {
        self.checks.insert(
            property.to_lowercase(),
            DefaultCheck::Contains(needle.to_string()),
        );
    }

    /// Is `value` meaningfully different from the default rendering of
    /// `property` on an element with tag `tag`?
    ///
    /// Pure predicate: unknown properties are significant as long as the
    /// value is non-empty and not a generic keyword.
    pub fn is_significant(&self, property: &str, value: &str, tag: &str) -> bool {
        if value.is_empty() || GENERIC_KEYWORDS.contains(&value) {
            return false;
        }

        let property = property.to_lowercase();

        if property == "display" {
            return Self::display_is_significant(value, tag);
        }

        match self.checks.get(&property) {
            Some(DefaultCheck::EqualsAny(defaults)) => !defaults.iter().any(|d| d == value),
            Some(DefaultCheck::Contains(needle)) => !value.contains(needle.as_str()),
            None => true,
        }
    }

    /// `display: block` on a block-level tag and `display: inline` on an
    /// inline tag restate the default; anything else is significant.
    fn display_is_significant(value: &str, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        match value {
            "block" => !BLOCK_TAGS.contains(&tag.as_str()),
            "inline" => !INLINE_TAGS.contains(&tag.as_str()),
            _ => true,
        }
    }
}
