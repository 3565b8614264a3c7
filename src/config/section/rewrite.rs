//! `[rewrite]` section configuration.
//!
//! Controls the post-render path rewriting pass.
//!
//! # Example
//!
//! ```toml
//! [rewrite]
//! enable = true
//! extensions = ["html", "css"]   # output kinds the pass touches
//! ```

use serde::{Deserialize, Serialize};

/// Post-render rewrite settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Enable the absolute-to-relative path rewriting pass.
    pub enable: bool,

    /// Output extensions processed by the pass.
    pub extensions: Vec<String>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            enable: true,
            extensions: vec!["html".into(), "css".into()],
        }
    }
}

impl RewriteConfig {
    /// Check whether the pass applies to the given output extension.
    pub fn applies_to(&self, ext: &str) -> bool {
        self.enable && self.extensions.iter().any(|e| e == ext)
    }
}
