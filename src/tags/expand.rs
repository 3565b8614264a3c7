//! Tag directive expansion.
//!
//! Finds `{% name args %}` directives in a page source, dispatches to the
//! handler table, and splices handler output back into the text. Block tags
//! consume everything up to their `{% endname %}` marker.

use regex::Regex;
use std::sync::LazyLock;

use super::{RenderContext, TagArgs, TagError, TagInvocation, TagKind, TagRegistry};

/// `{% name args %}` — a directive open stays on one line.
static TAG_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{%\s*(\w+)(.*?)%\}").unwrap());

/// Expand every theme tag in `source`.
///
/// The first failing tag aborts the expansion.
pub fn expand(
    source: &str,
    registry: &TagRegistry,
    ctx: &RenderContext<'_>,
) -> Result<String, TagError> {
    let mut out = String::with_capacity(source.len());
    let mut idx = 0;

    while idx < source.len() {
        let Some(caps) = TAG_OPEN.captures(&source[idx..]) else {
            out.push_str(&source[idx..]);
            break;
        };

        // Group 0 always exists for a match
        let m = caps.get(0).unwrap();
        let name = caps[1].to_string();
        let markup = caps[2].trim().to_string();

        out.push_str(&source[idx..idx + m.start()]);
        let after_open = idx + m.end();

        let spec = registry
            .get(&name)
            .ok_or_else(|| TagError::UnknownTag(name.clone()))?;

        let (body, next_idx) = match spec.kind {
            TagKind::Inline => (None, after_open),
            TagKind::Block => {
                let (body_end, after_close) = find_end_tag(source, after_open, &name)
                    .ok_or_else(|| TagError::UnclosedTag(name.clone()))?;
                (Some(source[after_open..body_end].to_string()), after_close)
            }
        };

        let invocation = TagInvocation {
            args: TagArgs::parse(&markup),
            name,
            raw_markup: markup,
            body,
        };

        out.push_str(&(spec.handler)(&invocation, ctx)?);
        idx = next_idx;
    }

    Ok(out)
}

/// Locate `{% endname %}` at or after `from`.
///
/// Returns (body end, position after the end marker).
fn find_end_tag(source: &str, from: usize, name: &str) -> Option<(usize, usize)> {
    let marker = format!("end{name}");
    let mut search = from;

    while let Some(open_rel) = source[search..].find("{%") {
        let open = search + open_rel;
        let rest = &source[open + 2..];
        let Some(close_rel) = rest.find("%}") else {
            return None;
        };
        if rest[..close_rel].trim() == marker {
            return Some((open, open + 2 + close_rel + 2));
        }
        search = open + 2;
    }

    None
}
