//! `calendar` inline tag: Google Calendar embed.

use url::Url;

use super::{RenderContext, TagError, TagInvocation};
use crate::utils::html::escape_attr;

const EMBED_BASE: &str = "https://calendar.google.com/calendar/embed";

pub fn calendar(invocation: &TagInvocation, _ctx: &RenderContext<'_>) -> Result<String, TagError> {
    let Some(src) = invocation.args.argv1() else {
        return Ok("📅\n".to_string());
    };

    let height = invocation.args.get("height").unwrap_or("480");
    let mode = invocation.args.get("mode").unwrap_or("AGENDA");

    let components = [
        ("height", height),
        ("mode", mode),
        ("showCalendars", "0"),
        ("showDate", "0"),
        ("showNav", "0"),
        ("showPrint", "0"),
        ("showTabs", "0"),
        ("showTitle", "0"),
        ("showTz", "1"),
        ("src", src),
    ];

    // Base URL is constant, parsing cannot fail
    let url = Url::parse_with_params(EMBED_BASE, &components).unwrap();

    let ctz = if invocation.args.flag("ctz") {
        " data-ctz"
    } else {
        ""
    };

    Ok(format!(
        "<iframe data-calendar=\"{}\"{} style=\"height: {}px;\"></iframe>\n",
        escape_attr(url.as_str()),
        ctz,
        escape_attr(height),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::markdown::MarkdownRenderer;
    use crate::tags::test_support::invocation;

    fn render(markup: &str) -> String {
        let config = test_parse_config("");
        let markdown = MarkdownRenderer::new();
        let ctx = RenderContext::new(&config, &markdown);
        calendar(&invocation("calendar", markup, None), &ctx).unwrap()
    }

    #[test]
    fn test_embed_url() {
        let out = render("cal@group.calendar.google.com");
        assert!(out.starts_with("<iframe data-calendar=\"https://calendar.google.com/calendar/embed?"));
        assert!(out.contains("height=480"));
        assert!(out.contains("mode=AGENDA"));
        assert!(out.contains("showTz=1"));
        assert!(out.contains("src=cal%40group.calendar.google.com"));
        assert!(out.contains("style=\"height: 480px;\""));
    }

    #[test]
    fn test_height_and_mode_options() {
        let out = render("cal@example.com height:600 mode:MONTH");
        assert!(out.contains("height=600"));
        assert!(out.contains("mode=MONTH"));
        assert!(out.contains("style=\"height: 600px;\""));
    }

    #[test]
    fn test_ctz_flag() {
        assert!(render("cal@example.com ctz").contains(" data-ctz "));
        assert!(!render("cal@example.com").contains("data-ctz"));
    }

    #[test]
    fn test_missing_src_falls_back() {
        assert_eq!(render(""), "📅\n");
    }
}
