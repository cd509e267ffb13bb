//! Site configuration module.
//!
//! Handles loading and validating an optional `config.toml` next to the docs
//! directory. The core build needs no configuration at all — the config file
//! exists for the surfaces that do: the sitemap needs a public base URL, and
//! scaffolded documents carry the site title and language.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_title = "Documentation"       # Used by scaffolded pages
//! language = "en"                    # lang attribute on scaffolded pages
//! base_url = "https://example.com"   # Public URL prefix for sitemap entries
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults; a missing file means stock config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, used by scaffolded documents.
    pub site_title: String,
    /// Language code for the `lang` attribute on scaffolded pages.
    pub language: String,
    /// Public URL prefix for sitemap entries, without a trailing slash.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Documentation".to_string(),
            language: "en".to_string(),
            base_url: "https://example.com".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Validation("base_url must not be empty".into()));
        }
        if self.language.is_empty() {
            return Err(ConfigError::Validation("language must not be empty".into()));
        }
        Ok(())
    }
}

/// Load config from `path`, falling back to stock defaults when the file
/// does not exist. A trailing slash on `base_url` is trimmed so sitemap
/// URL joining never doubles separators.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let mut config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str::<SiteConfig>(&content)?
    } else {
        SiteConfig::default()
    };
    while config.base_url.ends_with('/') {
        config.base_url.pop();
    }
    config.validate()?;
    Ok(config)
}

/// Stock `config.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    format!(
        r#"# docboard configuration. Every option is optional; the values below
# are the stock defaults. Unknown keys are rejected.

# Site title, used by scaffolded documents ("docboard new").
site_title = "{}"

# Language code for the lang attribute on scaffolded pages.
language = "{}"

# Public URL prefix for sitemap entries, without a trailing slash.
base_url = "{}"
"#,
        defaults.site_title, defaults.language, defaults.base_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stock_defaults_when_file_missing() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config.site_title, "Documentation");
        assert_eq!(config.language, "en");
        assert_eq!(config.base_url, "https://example.com");
    }

    #[test]
    fn sparse_file_overrides_only_named_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "base_url = \"https://docs.internal\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.base_url, "https://docs.internal");
        assert_eq!(config.site_title, "Documentation");
    }

    #[test]
    fn unknown_keys_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "base_uri = \"typo\"\n").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn trailing_slash_trimmed_from_base_url() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "base_url = \"https://docs.internal/\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.base_url, "https://docs.internal");
    }

    #[test]
    fn empty_base_url_fails_validation() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "base_url = \"\"\n").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn stock_config_parses_back_to_defaults() {
        let parsed: SiteConfig = toml::from_str(&stock_config_toml()).unwrap();
        assert_eq!(parsed.site_title, SiteConfig::default().site_title);
        assert_eq!(parsed.base_url, SiteConfig::default().base_url);
    }
}
