//! `render` command: expand theme tags and convert markdown to HTML.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::markdown::MarkdownRenderer;
use crate::page::OutputKind;
use crate::rewrite::relativize;
use crate::tags::{RenderContext, TagRegistry, expand};

pub fn run(file: &Path, page_dir: Option<&str>, config: &SiteConfig) -> Result<()> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("Failed to read `{}`", file.display()))?;

    let html = render_source(&source, page_dir, config)
        .with_context(|| format!("Failed to render `{}`", file.display()))?;

    print!("{html}");
    Ok(())
}

/// Expand tags, convert markdown, optionally relativize for a page dir.
fn render_source(source: &str, page_dir: Option<&str>, config: &SiteConfig) -> Result<String> {
    let markdown = MarkdownRenderer::new();
    let registry = TagRegistry::theme();
    let ctx = RenderContext::new(config, &markdown);

    let expanded = expand(source, &registry, &ctx)?;
    let mut html = markdown.convert(&expanded);

    if let Some(dir) = page_dir
        && config.rewrite.applies_to("html")
    {
        html = relativize(&html, dir, OutputKind::Html);
    }

    Ok(html)
}
