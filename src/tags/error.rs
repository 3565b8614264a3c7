//! Tag rendering errors.
//!
//! A failing tag aborts the render of its page with a descriptive message;
//! there is no silent fallback for malformed arguments.

use thiserror::Error;

/// Errors produced by tag handlers and the expander.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// Argument could not be parsed as a timestamp.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Second timestamp of an interval precedes the first.
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Too few arguments")]
    TooFewArguments,

    #[error("Too many arguments: {0}")]
    TooManyArguments(String),

    /// `{{ name }}` interpolation referenced an unassigned variable.
    #[error("No variable {0} was found in video tag")]
    UnknownVariable(String),

    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    /// Block tag without its matching end marker.
    #[error("Missing {{% end{0} %}} for block tag")]
    UnclosedTag(String),
}
