//! Selector configuration module
//!
//! This module provides type-safe configuration for the version selector.
//! Natively it is loaded from environment variables using the `config` and
//! `dotenvy` crates, with the `DOC_VERSION_SELECT` prefix and `__` separating
//! nested values. In the browser the same structure is read from JSON.
//!
//! # Example
//!
//! ```no_run
//! use doc_version_select::config::SelectorConfig;
//!
//! let config = SelectorConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Manifest file: {}", config.manifest_file);
//! ```

mod dom;
mod error;
mod fetch;

pub use dom::DomConfig;
pub use error::{ConfigError, ValidationError};
pub use fetch::FetchConfig;

use serde::Deserialize;

use crate::domain::version::{RedirectStrategy, UrlStrategy, DEFAULT_SEGMENT_INDEX};

/// Root selector configuration
///
/// One URL strategy and one redirect strategy are fixed per deployment.
/// Every field has a default, so an empty environment yields a working
/// configuration for `/<site>/<version>/...` sites.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SelectorConfig {
    /// How the current version is found in the page URL
    pub url_strategy: UrlStrategyKind,

    /// Directory segment holding the version (`path_segment` only)
    pub segment_index: usize,

    /// How the redirect URL is built
    pub redirect_strategy: RedirectStrategy,

    /// Manifest file name, relative to the site root
    pub manifest_file: String,

    /// Refuse manifests with duplicate versions or colliding aliases
    pub strict_manifest: bool,

    /// Page element ids and classes
    pub dom: DomConfig,

    /// Native HTTP settings
    pub fetch: FetchConfig,

    /// Rust log filter directive
    pub log_level: String,
}

/// URL strategy selector as written in configuration
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UrlStrategyKind {
    PathSegment,
    #[default]
    RegexOnFullUrl,
}

impl SelectorConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DOC_VERSION_SELECT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DOC_VERSION_SELECT__REDIRECT_STRATEGY=version_root_only`
    /// - `DOC_VERSION_SELECT__DOM__TITLE_ID=logo` -> `dom.title_id = "logo"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DOC_VERSION_SELECT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Parse configuration from a JSON object; missing keys take defaults
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let file = self.manifest_file.trim();
        if file.is_empty() {
            return Err(ValidationError::MissingRequired("MANIFEST_FILE"));
        }
        if file.starts_with('/') || file.contains("://") {
            return Err(ValidationError::InvalidManifestFile);
        }
        self.dom.validate()?;
        self.fetch.validate()?;
        Ok(())
    }

    /// The URL strategy described by this configuration
    pub fn url_strategy(&self) -> UrlStrategy {
        match self.url_strategy {
            UrlStrategyKind::PathSegment => UrlStrategy::PathSegment {
                index: self.segment_index,
            },
            UrlStrategyKind::RegexOnFullUrl => UrlStrategy::RegexOnFullUrl,
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            url_strategy: UrlStrategyKind::default(),
            segment_index: DEFAULT_SEGMENT_INDEX,
            redirect_strategy: RedirectStrategy::default(),
            manifest_file: default_manifest_file(),
            strict_manifest: false,
            dom: DomConfig::default(),
            fetch: FetchConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_manifest_file() -> String {
    "versions.json".to_string()
}

fn default_log_level() -> String {
    "warn,doc_version_select=info".to_string()
}
