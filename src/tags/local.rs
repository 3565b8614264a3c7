//! `local` inline tag: timestamp (or interval) localized client-side.

use super::time::{iso8601, parse_interval_end, parse_timestamp};
use super::{RenderContext, TagError, TagInvocation};

pub fn local(invocation: &TagInvocation, ctx: &RenderContext<'_>) -> Result<String, TagError> {
    let args = invocation.args.positionals();
    if args.is_empty() {
        return Err(TagError::TooFewArguments);
    }
    if args.len() > 2 {
        return Err(TagError::TooManyArguments(invocation.raw_markup.clone()));
    }

    let tz = ctx.config.timezone();
    let start = parse_timestamp(args[0], tz)
        .ok_or_else(|| TagError::InvalidTimestamp(args[0].to_string()))?;
    let mut value = iso8601(&start);

    if let Some(arg) = args.get(1) {
        let end = parse_interval_end(arg, &start, tz)
            .ok_or_else(|| TagError::InvalidTimestamp(arg.to_string()))?;
        if end < start {
            return Err(TagError::InvalidInterval(invocation.raw_markup.clone()));
        }
        value.push('/');
        value.push_str(&iso8601(&end));
    }

    Ok(format!("<span data-local='{value}'></span>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::markdown::MarkdownRenderer;
    use crate::tags::test_support::invocation;

    fn render(markup: &str) -> Result<String, TagError> {
        let config = test_parse_config("tz = \"America/New_York\"");
        let markdown = MarkdownRenderer::new();
        let ctx = RenderContext::new(&config, &markdown);
        local(&invocation("local", markup, None), &ctx)
    }

    #[test]
    fn test_single_timestamp() {
        assert_eq!(
            render("'2026-02-03 13:30'").unwrap(),
            "<span data-local='2026-02-03T13:30:00-05:00'></span>"
        );
    }

    #[test]
    fn test_interval() {
        assert_eq!(
            render("'2026-02-03 13:30' '14:45'").unwrap(),
            "<span data-local='2026-02-03T13:30:00-05:00/2026-02-03T14:45:00-05:00'></span>"
        );
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(render(""), Err(TagError::TooFewArguments));
    }

    #[test]
    fn test_too_many_arguments() {
        assert_eq!(
            render("a b c"),
            Err(TagError::TooManyArguments("a b c".into()))
        );
    }

    #[test]
    fn test_invalid_first_timestamp() {
        assert_eq!(
            render("noon-ish"),
            Err(TagError::InvalidTimestamp("noon-ish".into()))
        );
    }

    #[test]
    fn test_invalid_second_timestamp() {
        assert_eq!(
            render("'2026-02-03 13:30' gibberish"),
            Err(TagError::InvalidTimestamp("gibberish".into()))
        );
    }

    #[test]
    fn test_backwards_interval_rejected() {
        assert_eq!(
            render("'2026-02-03 13:30' '12:00'"),
            Err(TagError::InvalidInterval(
                "'2026-02-03 13:30' '12:00'".into()
            ))
        );
    }
}
