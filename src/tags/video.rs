//! `video` inline tag: YouTube / course video player embed.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use super::{RenderContext, TagArgs, TagError, TagInvocation};
use crate::utils::html::escape_attr;

/// YouTube watch/share/embed URL; captures the 11-character video id.
static YOUTUBE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(?:www\.)?(?:youtube\.com/(?:[^/\n\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})",
    )
    .unwrap()
});

/// Course video player URL, embedded as-is.
static PLAYER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://video\.cs50\.io/[^?\s]+").unwrap());

/// `{{ name }}` variable reference in the tag markup.
static VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([\w\-.]+)\s*\}\}").unwrap());

/// Alternate aspect ratios selectable by flag; the default is 16by9.
const RATIOS: [&str; 3] = ["21by9", "4by3", "1by1"];

/// Query parameters carried over from the watch URL to the embed URL.
const PASSTHROUGH: [&str; 9] = [
    "autoplay", "controls", "end", "index", "list", "mute", "playlist", "start", "t",
];

pub fn video(invocation: &TagInvocation, ctx: &RenderContext<'_>) -> Result<String, TagError> {
    let mut markup = invocation.raw_markup.trim().to_string();

    // Resolve a `{{ variable }}` reference from [assign]
    if let Some(caps) = VARIABLE.captures(&markup) {
        let name = caps[1].to_string();
        let value = ctx
            .config
            .assign(&name)
            .ok_or(TagError::UnknownVariable(name))?;
        markup = value.trim().to_string();
    }

    let args = TagArgs::parse(&markup);
    let Some(argv1) = args.argv1() else {
        return Ok(fallback());
    };

    if let Some(caps) = YOUTUBE.captures(argv1) {
        let id = &caps[1];
        let ratio = RATIOS
            .iter()
            .find(|ratio| args.flag(ratio))
            .copied()
            .unwrap_or("16by9");
        let src = embed_url(id, argv1);
        Ok(embed(&src, ratio))
    } else if PLAYER.is_match(argv1) {
        Ok(embed(argv1, "16by9"))
    } else {
        Ok(fallback())
    }
}

/// Build the youtube.com/embed URL, carrying supported watch parameters.
///
/// https://support.google.com/youtube/answer/171780
fn embed_url(id: &str, watch_url: &str) -> String {
    let mut components: Vec<(String, String)> = vec![
        ("modestbranding".into(), "1".into()),
        ("rel".into(), "0".into()),
        ("showinfo".into(), "0".into()),
    ];

    let params: Vec<(String, String)> = Url::parse(watch_url)
        .map(|url| {
            url.query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        })
        .unwrap_or_default();

    let has = |key: &str| params.iter().any(|(k, _)| k == key);

    for param in PASSTHROUGH {
        if let Some((_, value)) = params.iter().find(|(k, _)| k == param) {
            // Map t= to start= unless start= was given explicitly
            if param == "t" && !has("start") {
                set(&mut components, "start", value);
            } else {
                set(&mut components, param, value);
            }
        }
    }

    // Ensure the playlist menu appears
    if has("list") || has("playlist") {
        set(&mut components, "showinfo", "1");
    }

    // Base URL is constant, parsing cannot fail
    let url = Url::parse_with_params(
        &format!("https://www.youtube.com/embed/{id}"),
        components.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    )
    .unwrap();
    url.into()
}

/// Insert or overwrite a component, keeping first-insertion order.
fn set(components: &mut Vec<(String, String)>, key: &str, value: &str) {
    match components.iter_mut().find(|(k, _)| k == key) {
        Some((_, v)) => *v = value.to_string(),
        None => components.push((key.to_string(), value.to_string())),
    }
}

fn embed(src: &str, ratio: &str) -> String {
    format!(
        "<div class=\"border embed-responsive embed-responsive-{ratio}\" data-video>\n    <iframe allow=\"accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture\" allowfullscreen class=\"embed-responsive-item\" src=\"{}\"></iframe>\n</div>\n",
        escape_attr(src),
    )
}

fn fallback() -> String {
    "<p><img alt=\"static\" class=\"border\" data-video src=\"https://i.imgur.com/xnZ5A2u.gif\"></p>\n"
        .to_string()
}
