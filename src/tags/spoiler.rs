//! `spoiler` block tag: collapsed details/summary.

use super::{RenderContext, TagError, TagInvocation};
use crate::sanitize::sanitize_fragment;
use crate::utils::html::escape;

pub fn spoiler(invocation: &TagInvocation, ctx: &RenderContext<'_>) -> Result<String, TagError> {
    let text = invocation.args.argv1().unwrap_or("Spoiler");
    let summary = sanitize_fragment(&ctx.markdown.convert(&escape(text)));
    let details = ctx.markdown.convert(invocation.body_text());

    Ok(format!(
        "<details>\n    <summary>{summary}</summary>\n    {details}\n</details>\n"
    ))
}
