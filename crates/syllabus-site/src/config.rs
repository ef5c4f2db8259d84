//! Site configuration
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//!
//! ```toml
//! snapshot_path = "data/classes.json"
//! listing_path = "/class"
//! log_filter = "syllabus_filter=debug,info"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default route of the class listing page
pub const DEFAULT_LISTING_PATH: &str = "/class";

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// JSON class snapshot to serve
    pub snapshot_path: Option<PathBuf>,
    /// Route of the listing page
    pub listing_path: String,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SiteConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set snapshot path
    #[inline]
    #[must_use]
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    /// Set listing route
    #[inline]
    #[must_use]
    pub fn with_listing_path(mut self, path: impl Into<String>) -> Self {
        self.listing_path = path.into();
        self
    }

    /// Set tracing filter
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Parse configuration from TOML
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for values that fail validation.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`SiteConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let toml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&toml)
    }

    /// Check field constraints
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] if the listing path is not absolute
    /// or carries its own fragment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.listing_path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "listing_path must start with '/': {}",
                self.listing_path
            )));
        }
        if self.listing_path.contains('#') {
            return Err(ConfigError::Invalid(format!(
                "listing_path must not contain a fragment: {}",
                self.listing_path
            )));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Value failed validation
    #[error("invalid config: {0}")]
    Invalid(String),
}
