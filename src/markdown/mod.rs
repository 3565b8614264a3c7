//! Markdown conversion using pulldown-cmark.
//!
//! Theme-specific behavior (autolink display trimming, `.md` link
//! rewriting, list-marker capture) is applied as explicit transformations
//! on the parser's event stream — the parser itself is never altered.

mod transform;

use pulldown_cmark::{Options, Parser, html};

/// Options for markdown conversion
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
    /// Enable heading attributes extension (e.g., `# Heading {#custom-id}`)
    pub heading_attributes: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
            heading_attributes: true,
        }
    }
}

impl MarkdownOptions {
    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if self.heading_attributes {
            opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        }
        opts
    }
}

/// Markdown to HTML converter with theme post-processing.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    options: MarkdownOptions,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with_options(options: MarkdownOptions) -> Self {
        Self { options }
    }

    /// Convert a markdown string to an HTML fragment.
    pub fn convert(&self, markdown: &str) -> String {
        let parser =
            Parser::new_ext(markdown, self.options.to_pulldown_options()).into_offset_iter();
        let events = transform::apply(parser, markdown);

        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, events.into_iter());
        out
    }
}

/// Strip a single wrapping paragraph from converted markdown.
///
/// Removes a leading `<p>` and the first `</p>`, for span-level insertion
/// of converted text.
pub fn strip_paragraph(html: &str) -> String {
    let without_open = html.strip_prefix("<p>").unwrap_or(html);
    match without_open.find("</p>") {
        Some(idx) => {
            let mut s = String::with_capacity(without_open.len() - 4);
            s.push_str(&without_open[..idx]);
            s.push_str(&without_open[idx + 4..]);
            s
        }
        None => without_open.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_paragraph() {
        let html = MarkdownRenderer::new().convert("Hello **world**");
        assert_eq!(html.trim(), "<p>Hello <strong>world</strong></p>");
    }

    #[test]
    fn test_table_extension() {
        let html = MarkdownRenderer::new().convert("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_strip_paragraph() {
        assert_eq!(strip_paragraph("<p>hi</p>\n"), "hi\n");
        assert_eq!(strip_paragraph("plain"), "plain");
        assert_eq!(
            strip_paragraph("<p><em>x</em></p>\n"),
            "<em>x</em>\n"
        );
    }
}
