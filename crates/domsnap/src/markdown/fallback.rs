//! Regex-based Markdown conversion.
//!
//! Degraded mode for when no parsed tree is available: the same tag
//! substitutions as the tree converter, applied non-recursively over the
//! raw HTML string. Nesting is not handled correctly; callers can tell the
//! two strategies apart through [`ConversionMode`](super::ConversionMode).

use once_cell::sync::Lazy;
use regex::Regex;

static HEADINGS: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    (1..=6)
        .map(|level| {
            let pattern = format!("(?i)<h{level}[^>]*>(.*?)</h{level}>");
            let replacement = format!("{} ${{1}}\n\n", "#".repeat(level));
            (Regex::new(&pattern).expect("heading pattern"), replacement)
        })
        .collect()
});

static PARAGRAPH: Lazy<Regex> = Lazy::new(|| re(r"(?i)<p[^>]*>(.*?)</p>"));
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| re(r"(?i)<br\s*/?>"));
static STRONG: Lazy<Regex> = Lazy::new(|| re(r"(?i)<strong[^>]*>(.*?)</strong>"));
static BOLD: Lazy<Regex> = Lazy::new(|| re(r"(?i)<b[^>]*>(.*?)</b>"));
static EMPHASIS: Lazy<Regex> = Lazy::new(|| re(r"(?i)<em[^>]*>(.*?)</em>"));
static ITALIC: Lazy<Regex> = Lazy::new(|| re(r"(?i)<i[^>]*>(.*?)</i>"));
static ANCHOR: Lazy<Regex> = Lazy::new(|| re(r#"(?i)<a[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#));
static IMAGE_WITH_ALT: Lazy<Regex> =
    Lazy::new(|| re(r#"(?i)<img[^>]*src="([^"]*)"[^>]*alt="([^"]*)"[^>]*>"#));
static IMAGE: Lazy<Regex> = Lazy::new(|| re(r#"(?i)<img[^>]*src="([^"]*)"[^>]*>"#));
static CODE: Lazy<Regex> = Lazy::new(|| re(r"(?i)<code[^>]*>(.*?)</code>"));
static PRE: Lazy<Regex> = Lazy::new(|| re(r"(?i)<pre[^>]*>(.*?)</pre>"));
static UNORDERED_LIST: Lazy<Regex> = Lazy::new(|| re(r"(?is)<ul[^>]*>(.*?)</ul>"));
static ORDERED_LIST: Lazy<Regex> = Lazy::new(|| re(r"(?is)<ol[^>]*>(.*?)</ol>"));
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| re(r"(?i)<li[^>]*>(.*?)</li>"));
static TABLE: Lazy<Regex> = Lazy::new(|| re(r"(?is)<table[^>]*>(.*?)</table>"));
static TABLE_ROW: Lazy<Regex> = Lazy::new(|| re(r"(?is)<tr[^>]*>(.*?)</tr>"));
static TABLE_CELL: Lazy<Regex> = Lazy::new(|| re(r"(?is)<t[hd][^>]*>(.*?)</t[hd]>"));
static BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| re(r"(?is)<blockquote[^>]*>(.*?)</blockquote>"));
static ANY_TAG: Lazy<Regex> = Lazy::new(|| re(r"<[^>]*>"));
static EXTRA_BLANK_LINES: Lazy<Regex> = Lazy::new(|| re(r"\n\s*\n\s*\n"));

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern")
}

/// The non-recursive converter. Approximate by design.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexConverter;

impl RegexConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert an HTML string to Markdown with flat substitutions.
    pub fn convert(&self, html: &str) -> String {
        let mut markdown = html.to_string();

        for (pattern, replacement) in HEADINGS.iter() {
            markdown = pattern.replace_all(&markdown, replacement.as_str()).into_owned();
        }

        markdown = PARAGRAPH.replace_all(&markdown, "${1}\n\n").into_owned();
        markdown = LINE_BREAK.replace_all(&markdown, "\n").into_owned();
        markdown = STRONG.replace_all(&markdown, "**${1}**").into_owned();
        markdown = BOLD.replace_all(&markdown, "**${1}**").into_owned();
        markdown = EMPHASIS.replace_all(&markdown, "*${1}*").into_owned();
        markdown = ITALIC.replace_all(&markdown, "*${1}*").into_owned();
        markdown = ANCHOR.replace_all(&markdown, "[${2}](${1})").into_owned();
        markdown = IMAGE_WITH_ALT
            .replace_all(&markdown, "![${2}](${1})")
            .into_owned();
        markdown = IMAGE.replace_all(&markdown, "![Image](${1})").into_owned();
        markdown = CODE.replace_all(&markdown, "`${1}`").into_owned();
        markdown = PRE
            .replace_all(&markdown, "\n```\n${1}\n```\n")
            .into_owned();

        markdown = UNORDERED_LIST
            .replace_all(&markdown, |caps: &regex::Captures| {
                let items = LIST_ITEM.replace_all(&caps[1], "- ${1}\n");
                format!("\n{}\n", items)
            })
            .into_owned();

        markdown = ORDERED_LIST
            .replace_all(&markdown, |caps: &regex::Captures| {
                let mut counter = 0;
                let items = LIST_ITEM.replace_all(&caps[1], |item: &regex::Captures| {
                    counter += 1;
                    format!("{}. {}\n", counter, item[1].trim())
                });
                format!("\n{}\n", items)
            })
            .into_owned();

        markdown = TABLE
            .replace_all(&markdown, |caps: &regex::Captures| convert_table(&caps[1]))
            .into_owned();

        markdown = BLOCKQUOTE
            .replace_all(&markdown, |caps: &regex::Captures| {
                format!("\n> {}\n\n", caps[1].replace('\n', "\n> "))
            })
            .into_owned();

        markdown = ANY_TAG.replace_all(&markdown, "").into_owned();

        while EXTRA_BLANK_LINES.is_match(&markdown) {
            markdown = EXTRA_BLANK_LINES.replace_all(&markdown, "\n\n").into_owned();
        }

        markdown.trim().to_string()
    }
}

fn convert_table(content: &str) -> String {
    let mut table = String::from("\n");
    for (row_index, row) in TABLE_ROW.captures_iter(content).enumerate() {
        let cells: Vec<String> = TABLE_CELL
            .captures_iter(&row[1])
            .map(|cell| cell[1].trim().to_string())
            .collect();
        if cells.is_empty() {
            continue;
        }

        table.push_str(&format!("| {} |\n", cells.join(" | ")));
        if row_index == 0 {
            let separator: Vec<&str> = cells.iter().map(|_| " --- ").collect();
            table.push_str(&format!("|{}|\n", separator.join("|")));
        }
    }
    table.push('\n');
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(html: &str) -> String {
        RegexConverter::new().convert(html)
    }

    #[test]
    fn test_heading() {
        assert_eq!(convert("<h1>Title</h1>"), "# Title");
        assert_eq!(convert("<h2 class=\"x\">Sub</h2>"), "## Sub");
    }

    #[test]
    fn test_inline_formatting() {
        assert_eq!(
            convert("<p>Hello <strong>world</strong> with <em>formatting</em></p>"),
            "Hello **world** with *formatting*"
        );
    }

    #[test]
    fn test_link_and_image() {
        assert_eq!(
            convert(r#"<a href="https://example.com">Link</a>"#),
            "[Link](https://example.com)"
        );
        assert_eq!(
            convert(r#"<img src="a.png" alt="Alt">"#),
            "![Alt](a.png)"
        );
        assert_eq!(convert(r#"<img src="a.png">"#), "![Image](a.png)");
    }

    #[test]
    fn test_lists() {
        assert_eq!(convert("<ul><li>A</li><li>B</li></ul>"), "- A\n- B");
        assert_eq!(convert("<ol><li>A</li><li>B</li></ol>"), "1. A\n2. B");
    }

    #[test]
    fn test_table() {
        let markdown = convert(
            "<table><tr><th>H1</th><th>H2</th></tr><tr><td>a</td><td>b</td></tr></table>",
        );
        assert_eq!(markdown, "| H1 | H2 |\n| --- | --- |\n| a | b |");
    }

    #[test]
    fn test_unknown_tags_are_stripped() {
        assert_eq!(convert("<section><p>kept</p></section>"), "kept");
    }

    #[test]
    fn test_no_nesting_awareness() {
        // The whole point of the tree converter: this one flattens nested
        // lists instead of indenting them.
        let markdown = convert("<ul><li>outer<ul><li>inner</li></ul></li></ul>");
        assert!(markdown.contains("inner"));
        assert!(!markdown.contains("    -"));
    }
}
