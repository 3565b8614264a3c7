//! Event-stream transformations applied after parsing.
//!
//! Equivalent behavior to the theme's historical converter patches,
//! expressed as a pass over pulldown-cmark events:
//! - autolink display text hides the scheme and a trailing slash
//! - inline links ending in `.md` are rewritten to directory form
//! - unordered list items capture their source marker as `data-marker`

use pulldown_cmark::{CowStr, Event, LinkType, Tag, TagEnd};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Inline link destination ending in `.md` (plus trailing fragment/suffix)
static MD_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\S*)\.md(\s*.*)$").unwrap());

/// Scheme and `www.` prefix hidden from autolink display text
static AUTOLINK_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://(www\.)?").unwrap());

/// Run the theme transformations over an offset-annotated event stream.
pub fn apply<'a, I>(events: I, source: &str) -> Vec<Event<'a>>
where
    I: Iterator<Item = (Event<'a>, Range<usize>)>,
{
    let mut out: Vec<Event<'a>> = Vec::new();
    let mut in_autolink = false;
    // true = unordered list
    let mut list_stack: Vec<bool> = Vec::new();
    // true = item start was replaced with a raw <li data-marker> tag
    let mut item_stack: Vec<bool> = Vec::new();

    for (event, range) in events {
        match event {
            Event::Start(Tag::List(start)) => {
                list_stack.push(start.is_none());
                out.push(Event::Start(Tag::List(start)));
            }
            Event::End(TagEnd::List(ordered)) => {
                list_stack.pop();
                out.push(Event::End(TagEnd::List(ordered)));
            }
            Event::Start(Tag::Item) => {
                let marker = list_stack
                    .last()
                    .copied()
                    .unwrap_or(false)
                    .then(|| item_marker(source, range.start))
                    .flatten();
                match marker {
                    Some(c) => {
                        item_stack.push(true);
                        out.push(Event::Html(format!("<li data-marker=\"{c}\">").into()));
                    }
                    None => {
                        item_stack.push(false);
                        out.push(Event::Start(Tag::Item));
                    }
                }
            }
            Event::End(TagEnd::Item) => {
                if item_stack.pop().unwrap_or(false) {
                    out.push(Event::Html("</li>\n".into()));
                } else {
                    out.push(Event::End(TagEnd::Item));
                }
            }
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                in_autolink = link_type == LinkType::Autolink;
                let dest_url = rewrite_md_dest(link_type, dest_url);
                out.push(Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                }));
            }
            Event::End(TagEnd::Link) => {
                in_autolink = false;
                out.push(Event::End(TagEnd::Link));
            }
            Event::Text(text) if in_autolink => {
                let trimmed = AUTOLINK_PREFIX.replace(&text, "");
                let trimmed = trimmed.strip_suffix('/').unwrap_or(&trimmed);
                out.push(Event::Text(CowStr::from(trimmed.to_string())));
            }
            other => out.push(other),
        }
    }

    out
}

/// Rewrite an inline `foo.md` destination to `foo/`, preserving any suffix.
fn rewrite_md_dest(link_type: LinkType, dest_url: CowStr<'_>) -> CowStr<'_> {
    if link_type != LinkType::Inline {
        return dest_url;
    }
    match MD_LINK.captures(&dest_url) {
        Some(caps) => CowStr::from(format!("{}/{}", &caps[1], &caps[2])),
        None => dest_url,
    }
}

/// First non-blank character of the source line an item starts on.
fn item_marker(source: &str, offset: usize) -> Option<char> {
    if offset > source.len() {
        return None;
    }
    let line_start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    source[line_start..]
        .trim_start()
        .chars()
        .next()
        .filter(|c| matches!(c, '-' | '*' | '+'))
}
