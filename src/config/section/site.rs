//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "CS101"
//! url = "https://example.github.io/cs101"
//! tz = "America/New_York"     # IANA time zone for naive timestamps
//! locale = "en"
//! ```

use serde::{Deserialize, Serialize};

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title.
    pub title: String,

    /// Canonical site URL. Trailing slashes are stripped on load.
    pub url: Option<String>,

    /// IANA time zone name used to interpret naive timestamps in theme tags.
    pub tz: String,

    /// Language code (BCP 47).
    pub locale: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: None,
            tz: "UTC".into(),
            locale: "en".into(),
        }
    }
}
