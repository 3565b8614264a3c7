//! `alert` block tag: contextual alert box.

use super::{RenderContext, TagError, TagInvocation};

/// Recognized contextual classes; anything else renders unstyled.
const CONTEXTS: [&str; 8] = [
    "primary",
    "secondary",
    "success",
    "danger",
    "warning",
    "info",
    "light",
    "dark",
];

pub fn alert(invocation: &TagInvocation, ctx: &RenderContext<'_>) -> Result<String, TagError> {
    let context = invocation
        .args
        .argv1()
        .filter(|arg| CONTEXTS.contains(arg))
        .unwrap_or("");

    let message = ctx.markdown.convert(invocation.body_text());

    Ok(format!(
        "<div class=\"alert\" data-alert=\"{context}\" role=\"alert\">\n  {message}\n</div>\n"
    ))
}
