//! Inline HTML sanitizer for tag-rendered fragments.
//!
//! Keeps a small allow-list of phrasing-content elements (a subset of
//! https://developer.mozilla.org/en-US/docs/Web/Guide/HTML/Content_categories#Phrasing_content),
//! strips all attributes, and promotes the contents of everything else.
//! `script` and `style` are removed entirely, content included.

/// Elements preserved by `sanitize_fragment`.
pub const ALLOWED_TAGS: [&str; 10] = [
    "b", "code", "em", "i", "img", "kbd", "span", "strong", "sub", "sup",
];

/// Sanitize an HTML fragment down to allow-listed inline elements.
///
/// An unparseable fragment is returned trimmed but otherwise unchanged —
/// sanitization never corrupts content it cannot parse.
pub fn sanitize_fragment(html: &str) -> String {
    let Ok(dom) = tl::parse(html, tl::ParserOptions::default()) else {
        return html.trim().to_string();
    };

    let parser = dom.parser();
    let mut out = String::with_capacity(html.len());
    for handle in dom.children() {
        write_node(*handle, parser, &mut out);
    }

    out.trim().to_string()
}

/// Append the sanitized form of one node to `out`.
fn write_node(handle: tl::NodeHandle, parser: &tl::Parser, out: &mut String) {
    let Some(node) = handle.get(parser) else {
        return;
    };

    match node {
        tl::Node::Tag(tag) => {
            let name = tag.name().as_utf8_str().to_lowercase();

            // Raw text elements are dropped with their contents
            if name == "script" || name == "style" {
                return;
            }

            let allowed = ALLOWED_TAGS.contains(&name.as_str());
            if allowed {
                out.push('<');
                out.push_str(&name);
                out.push('>');
            }

            for child in tag.children().top().iter() {
                write_node(*child, parser, out);
            }

            // img is void: no closing tag
            if allowed && name != "img" {
                out.push_str("</");
                out.push_str(&name);
                out.push('>');
            }
        }
        tl::Node::Raw(bytes) => out.push_str(&bytes.as_utf8_str()),
        tl::Node::Comment(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_tags_kept() {
        assert_eq!(sanitize_fragment("<b>x</b>"), "<b>x</b>");
        assert_eq!(sanitize_fragment("<code>ls</code>"), "<code>ls</code>");
        assert_eq!(
            sanitize_fragment("<kbd>ctrl</kbd>+<kbd>c</kbd>"),
            "<kbd>ctrl</kbd>+<kbd>c</kbd>"
        );
    }

    #[test]
    fn test_attributes_stripped() {
        assert_eq!(
            sanitize_fragment("<span class=\"x\" onclick=\"evil()\">y</span>"),
            "<span>y</span>"
        );
    }

    #[test]
    fn test_disallowed_contents_promoted() {
        assert_eq!(sanitize_fragment("<p>hello <em>there</em></p>"), "hello <em>there</em>");
        assert_eq!(sanitize_fragment("<a href=\"/x\">link</a>"), "link");
    }

    #[test]
    fn test_script_removed_entirely() {
        assert_eq!(sanitize_fragment("a<script>alert(1)</script>b"), "ab");
        assert_eq!(sanitize_fragment("<style>p{}</style>x"), "x");
    }

    #[test]
    fn test_comments_dropped() {
        assert_eq!(sanitize_fragment("a<!-- no -->b"), "ab");
    }

    #[test]
    fn test_result_trimmed() {
        assert_eq!(sanitize_fragment("  <b>x</b>  "), "<b>x</b>");
    }

    #[test]
    fn test_plain_text_passthrough() {
        assert_eq!(sanitize_fragment("Next"), "Next");
    }
}
