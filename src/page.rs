//! Rendered page output model for the post-render pass.

use std::path::Path;

use crate::config::SiteConfig;
use crate::rewrite;

/// Output kind of a rendered page, classified by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Html,
    Css,
}

impl OutputKind {
    /// Classify an output extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "html" => Some(Self::Html),
            "css" => Some(Self::Css),
            _ => None,
        }
    }

    /// The extension this kind corresponds to.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
        }
    }
}

/// A fully rendered page awaiting post-processing.
#[derive(Debug)]
pub struct RenderedPage {
    /// Rendered output text.
    pub output: String,
    /// Output directory relative to the site root (POSIX-style, "" for root).
    pub dir: String,
    /// Output kind.
    pub kind: OutputKind,
}

impl RenderedPage {
    pub fn new(output: String, dir: impl Into<String>, kind: OutputKind) -> Self {
        Self {
            output,
            dir: dir.into(),
            kind,
        }
    }
}

/// Post-render hook: resolve absolute-rooted references to relative paths.
///
/// Invoked once per page after all content generation is complete. Pages are
/// independent; callers may run this in parallel across pages.
pub fn post_render(page: &mut RenderedPage, config: &SiteConfig) {
    if !config.rewrite.applies_to(page.kind.extension()) {
        return;
    }
    page.output = rewrite::relativize(&page.output, &page.dir, page.kind);
}

/// Compute a page's output directory relative to the site output root.
///
/// Always POSIX-style forward slashes, regardless of host OS.
pub fn page_dir(root: &Path, file: &Path) -> String {
    let parent = file.parent().unwrap_or(Path::new(""));
    let rel = parent.strip_prefix(root).unwrap_or(Path::new(""));
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_kind_from_extension() {
        assert_eq!(OutputKind::from_extension("html"), Some(OutputKind::Html));
        assert_eq!(OutputKind::from_extension("css"), Some(OutputKind::Css));
        assert_eq!(OutputKind::from_extension("js"), None);
    }

    #[test]
    fn test_page_dir() {
        let root = Path::new("_site");
        assert_eq!(
            page_dir(root, Path::new("_site/blog/post1/index.html")),
            "blog/post1"
        );
        assert_eq!(page_dir(root, Path::new("_site/blog/about.html")), "blog");
        assert_eq!(page_dir(root, Path::new("_site/index.html")), "");
    }

    #[test]
    fn test_post_render_respects_config() {
        let config = crate::config::test_parse_config("[rewrite]\nenable = false");
        let mut page = RenderedPage::new(
            "<a href=\"/docs/\">x</a>".to_string(),
            "a",
            OutputKind::Html,
        );
        let before = page.output.clone();
        post_render(&mut page, &config);
        assert_eq!(page.output, before);
    }

    #[test]
    fn test_post_render_rewrites_html() {
        let config = crate::config::test_parse_config("");
        let mut page = RenderedPage::new(
            "<html><head></head><body><a href=\"/docs/\">x</a></body></html>".to_string(),
            "a",
            OutputKind::Html,
        );
        post_render(&mut page, &config);
        assert!(page.output.contains("href=\"../docs/\""));
    }
}
