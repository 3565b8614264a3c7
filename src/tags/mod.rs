//! Theme tag handlers.
//!
//! Each tag is a stateless handler function taking an invocation (parsed
//! arguments plus, for block tags, the enclosed body) and a render context.
//! Registration is the explicit construction of the handler table in
//! [`TagRegistry::theme`] — there are no load-time side effects and no
//! global registry.
//!
//! | Tag        | Kind   | Output                                   |
//! |------------|--------|------------------------------------------|
//! | `after`    | block  | content gated until a timestamp          |
//! | `alert`    | block  | contextual alert box                     |
//! | `before`   | block  | content gated up to a timestamp          |
//! | `calendar` | inline | Google Calendar embed                    |
//! | `local`    | inline | timestamp rendered in the viewer's zone  |
//! | `next`     | inline | reveal-next button                       |
//! | `spoiler`  | block  | collapsed details/summary                |
//! | `video`    | inline | YouTube / course player embed            |

mod alert;
mod args;
mod calendar;
mod error;
mod expand;
mod local;
mod next;
mod spoiler;
mod time;
mod video;
mod when;

pub use args::TagArgs;
pub use error::TagError;
pub use expand::expand;

use std::collections::BTreeMap;

use crate::config::SiteConfig;
use crate::markdown::MarkdownRenderer;

// ============================================================================
// render context
// ============================================================================

/// Context shared by every tag handler during one page render.
pub struct RenderContext<'a> {
    /// Immutable site configuration.
    pub config: &'a SiteConfig,
    /// Markdown converter for tag bodies and labels.
    pub markdown: &'a MarkdownRenderer,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a SiteConfig, markdown: &'a MarkdownRenderer) -> Self {
        Self { config, markdown }
    }
}

// ============================================================================
// invocation
// ============================================================================

/// One occurrence of a tag in a page source.
#[derive(Debug)]
pub struct TagInvocation {
    /// Tag name as written.
    pub name: String,
    /// Raw argument markup, untrimmed of quoting.
    pub raw_markup: String,
    /// Parsed arguments.
    pub args: TagArgs,
    /// Enclosed body for block tags.
    pub body: Option<String>,
}

impl TagInvocation {
    /// Body text, empty for inline tags.
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

// ============================================================================
// registry
// ============================================================================

/// Whether a tag stands alone or encloses a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Inline,
    Block,
}

/// A stateless tag handler.
pub type TagHandler = fn(&TagInvocation, &RenderContext<'_>) -> Result<String, TagError>;

/// A registered tag: its kind and handler.
pub struct TagSpec {
    pub kind: TagKind,
    pub handler: TagHandler,
}

/// Mapping from tag name to handler.
pub struct TagRegistry {
    handlers: BTreeMap<&'static str, TagSpec>,
}

impl TagRegistry {
    /// The theme's handler table.
    pub fn theme() -> Self {
        let mut handlers: BTreeMap<&'static str, TagSpec> = BTreeMap::new();

        let mut add = |name, kind, handler| {
            handlers.insert(name, TagSpec { kind, handler });
        };

        add("after", TagKind::Block, when::after as TagHandler);
        add("alert", TagKind::Block, alert::alert);
        add("before", TagKind::Block, when::before);
        add("calendar", TagKind::Inline, calendar::calendar);
        add("local", TagKind::Inline, local::local);
        add("next", TagKind::Inline, next::next);
        add("spoiler", TagKind::Block, spoiler::spoiler);
        add("video", TagKind::Inline, video::video);

        Self { handlers }
    }

    /// Look up a tag by name.
    pub fn get(&self, name: &str) -> Option<&TagSpec> {
        self.handlers.get(name)
    }

    /// Registered tag names, in order.
    #[allow(dead_code)]
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }
}
