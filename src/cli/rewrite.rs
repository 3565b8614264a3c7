//! `rewrite` command: post-render path relativization over a site directory.
//!
//! Pages are independent, so files are processed in parallel; each is read,
//! rewritten relative to its own directory, and written back only when the
//! pass changed something.

use anyhow::{Context, Result, ensure};
use jwalk::WalkDir;
use rayon::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::page::{OutputKind, RenderedPage, page_dir, post_render};
use crate::{debug, log};

pub fn run(dir: Option<&Path>, config: &SiteConfig) -> Result<()> {
    let root = dir.unwrap_or(Path::new("_site"));
    ensure!(
        root.is_dir(),
        "output directory `{}` not found",
        root.display()
    );

    let files = collect_pages(root, config);

    let results: Vec<bool> = files
        .par_iter()
        .map(|path| rewrite_file(path, root, config))
        .collect::<Result<_>>()?;

    let rewritten = results.iter().filter(|changed| **changed).count();
    log!(
        "rewrite";
        "{} pages rewritten, {} unchanged",
        rewritten,
        results.len() - rewritten
    );

    Ok(())
}

/// Collect the output files the pass applies to.
fn collect_pages(root: &Path, config: &SiteConfig) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .and_then(OsStr::to_str)
                .is_some_and(|ext| config.rewrite.applies_to(ext))
        })
        .collect()
}

/// Rewrite one output file in place. Returns whether it changed.
fn rewrite_file(path: &Path, root: &Path, config: &SiteConfig) -> Result<bool> {
    let Some(kind) = path
        .extension()
        .and_then(OsStr::to_str)
        .and_then(OutputKind::from_extension)
    else {
        return Ok(false);
    };

    let output = fs::read_to_string(path)
        .with_context(|| format!("Failed to read `{}`", path.display()))?;

    let mut page = RenderedPage::new(output, page_dir(root, path), kind);
    let before_len = page.output.len();
    let before = page.output.clone();
    post_render(&mut page, config);

    if page.output == before {
        return Ok(false);
    }

    debug!("rewrite"; "{} ({} -> {} bytes)", path.display(), before_len, page.output.len());
    fs::write(path, &page.output)
        .with_context(|| format!("Failed to write `{}`", path.display()))?;

    Ok(true)
}
