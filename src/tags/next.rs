//! `next` inline tag: reveal-the-next-section button.

use super::{RenderContext, TagError, TagInvocation};
use crate::sanitize::sanitize_fragment;
use crate::utils::html::escape;

pub fn next(invocation: &TagInvocation, ctx: &RenderContext<'_>) -> Result<String, TagError> {
    let text = invocation.args.argv1().unwrap_or("Next");
    let converted = ctx.markdown.convert(&escape(text));
    let button = sanitize_fragment(&converted);

    Ok(format!(
        "<button class=\"btn btn-dark btn-sm\" data-next type=\"button\">{button}</button>\n"
    ))
}
