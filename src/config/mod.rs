//! Site configuration management for `lectern.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   └── rewrite    # [rewrite]
//! ├── types/         # Utility types
//! │   └── error      # ConfigError
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The configuration is loaded once at startup, finalized, and then passed
//! by shared reference to every rendering and rewriting call. Nothing
//! mutates it afterwards.

pub mod section;
pub mod types;

pub use section::{RewriteConfig, SiteSectionConfig};
pub use types::ConfigError;

use crate::{cli::Cli, log};
use anyhow::{Context, Result, bail};
use chrono_tz::Tz;
use std::collections::BTreeMap;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing lectern.toml
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata (title, url, tz, locale)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Variables available to tag interpolation (`{{ name }}` in video tags)
    #[serde(default)]
    pub assign: BTreeMap<String, String>,

    /// Post-render rewrite settings
    #[serde(default)]
    pub rewrite: RewriteConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            assign: BTreeMap::new(),
            rewrite: RewriteConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root is
    /// the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = Self::resolve_config_path(&cli.config) else {
            bail!(
                "Config file '{}' not found. Create one next to your site sources.",
                cli.config.display()
            );
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.finalize();
        config.validate()?;

        Ok(config)
    }

    /// Resolve the config file path: as given if it exists, otherwise search
    /// upward from the current directory.
    fn resolve_config_path(config: &Path) -> Option<PathBuf> {
        if config.exists() {
            return Some(config.to_path_buf());
        }
        if config.is_absolute() {
            return None;
        }

        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join(config);
            if candidate.exists() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse config file `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Finalize configuration after loading.
    ///
    /// Resolves the project root and strips trailing slashes from the site
    /// URL so relative references never double up separators.
    fn finalize(&mut self) {
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        if let Some(url) = self.site.url.take() {
            let trimmed = url.trim_end_matches('/');
            self.site.url = Some(trimmed.to_string());
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.tz.parse::<Tz>().is_err() {
            bail!(ConfigError::Validation(format!(
                "unknown time zone `{}` in [site] tz",
                self.site.tz
            )));
        }

        for ext in &self.rewrite.extensions {
            if ext != "html" && ext != "css" {
                bail!(ConfigError::Validation(format!(
                    "unsupported extension `{}` in [rewrite] extensions (expected \"html\" or \"css\")",
                    ext
                )));
            }
        }

        Ok(())
    }

    /// Time zone used to interpret naive timestamps.
    ///
    /// Falls back to UTC; `validate()` has already rejected unknown names.
    pub fn timezone(&self) -> Tz {
        self.site.tz.parse().unwrap_or(Tz::UTC)
    }

    /// Look up a tag-interpolation variable from `[assign]`.
    pub fn assign(&self, name: &str) -> Option<&str> {
        self.assign.get(name).map(String::as_str)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` section.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"CS101\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.site.tz, "UTC");
        assert!(config.assign.is_empty());
        assert!(config.rewrite.enable);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_finalize_strips_trailing_slashes() {
        let mut config = test_parse_config("url = \"https://example.com/course///\"");
        config.config_path = PathBuf::from("lectern.toml");
        config.finalize();
        assert_eq!(
            config.site.url.as_deref(),
            Some("https://example.com/course")
        );
    }

    #[test]
    fn test_validate_rejects_bad_tz() {
        let config = test_parse_config("tz = \"Mars/Olympus\"");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_extension() {
        let config = test_parse_config("[rewrite]\nextensions = [\"js\"]");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_assign_lookup() {
        let config = test_parse_config("[assign]\nvideo = \"https://youtu.be/xvFZjo5PgG0\"");
        assert_eq!(config.assign("video"), Some("https://youtu.be/xvFZjo5PgG0"));
        assert_eq!(config.assign("missing"), None);
    }

    #[test]
    fn test_timezone_parses() {
        let config = test_parse_config("tz = \"America/New_York\"");
        assert_eq!(config.timezone(), chrono_tz::America::New_York);
    }
}
