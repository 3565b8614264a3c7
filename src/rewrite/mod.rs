//! Post-render absolute-to-relative path rewriting.
//!
//! Rewrites every absolute-rooted reference (`/foo/bar`) in a rendered
//! page's output into a path relative to the page's output directory.
//! Scheme-qualified (`http://...`) and already-relative references are
//! never touched, so the pass is idempotent.
//!
//! The pass is a pure function of (document, page directory): no state, no
//! side effects beyond the returned string, and it never fails on malformed
//! input — the worst case is a reference left unmodified.

mod css;
mod html;
mod relpath;

pub use relpath::relative_path;

use crate::page::OutputKind;

/// Rewrite absolute-rooted references in `output` relative to `page_dir`.
pub fn relativize(output: &str, page_dir: &str, kind: OutputKind) -> String {
    match kind {
        OutputKind::Html => html::rewrite_html(output, page_dir),
        OutputKind::Css => css::rewrite_css(output, page_dir),
    }
}
