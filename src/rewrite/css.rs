//! CSS pass: rewrite absolute-rooted `url()` references.
//!
//! Scans the stylesheet text for `url(...)` tokens in the three quoting
//! styles and rewrites absolute-rooted inner paths, preserving the original
//! quoting. Tokens that do not match (already relative, scheme-qualified,
//! or malformed) are left byte-for-byte untouched.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::relpath::relative_path;

/// `url( ... )` token; the group captures everything up to the closing paren.
static URL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"url\(\s*([^)]*)\)").unwrap());

/// `'/path'` (single-quoted, absolute-rooted)
static SINGLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^'(/.*)'$").unwrap());

/// `"/path"` (double-quoted, absolute-rooted)
static DOUBLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"^"(/.*)"$"#).unwrap());

/// `/path` (unquoted, absolute-rooted, not ending in a stray quote)
static UNQUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(/(?:.*[^'"])?)$"#).unwrap());

/// Rewrite absolute-rooted `url()` paths relative to `page_dir`.
pub fn rewrite_css(output: &str, page_dir: &str) -> String {
    URL_TOKEN
        .replace_all(output, |caps: &Captures| {
            let group = &caps[1];
            if let Some(m) = SINGLE_QUOTED.captures(group) {
                format!("url('{}')", relative_path(page_dir, &m[1]))
            } else if let Some(m) = DOUBLE_QUOTED.captures(group) {
                format!("url(\"{}\")", relative_path(page_dir, &m[1]))
            } else if let Some(m) = UNQUOTED.captures(group) {
                format!("url({})", relative_path(page_dir, &m[1]))
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_quoted() {
        let out = rewrite_css("body{background:url('/img/bg.png')}", "a/b");
        assert_eq!(out, "body{background:url('../../img/bg.png')}");
    }

    #[test]
    fn test_double_quoted() {
        let out = rewrite_css("body{background:url(\"/img/bg.png\")}", "a");
        assert_eq!(out, "body{background:url(\"../img/bg.png\")}");
    }

    #[test]
    fn test_unquoted() {
        let out = rewrite_css("@font-face{src:url(/fonts/x.woff2)}", "a/b");
        assert_eq!(out, "@font-face{src:url(../../fonts/x.woff2)}");
    }

    #[test]
    fn test_quote_style_preserved() {
        let css = "a{x:url('/p.png')}b{y:url(\"/p.png\")}c{z:url(/p.png)}";
        let out = rewrite_css(css, "d");
        assert_eq!(
            out,
            "a{x:url('../p.png')}b{y:url(\"../p.png\")}c{z:url(../p.png)}"
        );
    }

    #[test]
    fn test_relative_untouched() {
        let css = "body{background:url('img/bg.png')}";
        assert_eq!(rewrite_css(css, "a/b"), css);
    }

    #[test]
    fn test_scheme_qualified_untouched() {
        let css = "body{background:url('https://cdn.example.com/bg.png')}";
        assert_eq!(rewrite_css(css, "a/b"), css);
    }

    #[test]
    fn test_data_uri_untouched() {
        let css = "body{background:url(data:image/png;base64,iVBOR)}";
        assert_eq!(rewrite_css(css, "a"), css);
    }

    #[test]
    fn test_malformed_untouched() {
        // Unbalanced quote inside the group: left byte-for-byte
        let css = "body{background:url('/img/bg.png)}";
        assert_eq!(rewrite_css(css, "a/b"), css);

        let css = "body{background:url('/img/bg.png\")}";
        assert_eq!(rewrite_css(css, "a/b"), css);
    }

    #[test]
    fn test_multiple_tokens() {
        let css = "a{b:url('/x.png')}c{d:url('/y/')}";
        let out = rewrite_css(css, "p/q");
        assert_eq!(out, "a{b:url('../../x.png')}c{d:url('../../y/')}");
    }

    #[test]
    fn test_root_page() {
        let out = rewrite_css("a{b:url('/x.png')}", "");
        assert_eq!(out, "a{b:url('x.png')}");
    }
}
