//! `after` / `before` block tags.
//!
//! Gate content on a timestamp: the rendered markup carries the boundary in
//! a `data-after` / `data-before` attribute and client-side script decides
//! visibility in the viewer's clock.

use regex::Regex;
use std::sync::LazyLock;

use super::time::{iso8601, parse_timestamp};
use super::{RenderContext, TagError, TagInvocation};
use crate::markdown::strip_paragraph;

/// Body begins on a fresh line (blank up to the first newline).
static LEADING_BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[\t ]*\r?\n").unwrap());

/// Body ends with a newline (possibly trailed by blank space).
static TRAILING_BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)\r?\n[\t ]*$").unwrap());

pub fn after(invocation: &TagInvocation, ctx: &RenderContext<'_>) -> Result<String, TagError> {
    render_gate(invocation, ctx, "data-after")
}

pub fn before(invocation: &TagInvocation, ctx: &RenderContext<'_>) -> Result<String, TagError> {
    render_gate(invocation, ctx, "data-before")
}

fn render_gate(
    invocation: &TagInvocation,
    ctx: &RenderContext<'_>,
    attr: &str,
) -> Result<String, TagError> {
    let arg = invocation.args.argv1().unwrap_or("");
    let timestamp = parse_timestamp(arg, ctx.config.timezone())
        .ok_or_else(|| TagError::InvalidTimestamp(arg.to_string()))?;
    let ts = iso8601(&timestamp);

    let text = invocation.body_text();
    let message = ctx.markdown.convert(text).trim().to_string();

    // Infer block-level or span-level from the body's shape: a body that
    // opens and closes on its own lines becomes a div, a one-liner a span.
    if LEADING_BLANK.is_match(text) && TRAILING_BLANK.is_match(text) {
        Ok(format!("\n<div {attr}='{ts}'>{message}</div>\n"))
    } else {
        Ok(format!(
            "<span {attr}='{ts}'>{}</span>",
            strip_paragraph(&message)
        ))
    }
}
