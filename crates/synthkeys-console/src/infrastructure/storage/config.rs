//! TOML-based configuration for the console.
//!
//! The file location is passed with `--config` or the `SYNTHKEYS_CONFIG`
//! environment variable.  Without one, built-in defaults apply.
//!
//! ```toml
//! [console]
//! log_level = "debug"
//! mimetype = "text/plain"
//! blob_length = 6048
//!
//! [keys]
//! COMPOSE = 0xFF20
//! HYPER = 0xFFED
//! ```
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when the field is absent from the TOML file, so a partial
//! file (or an empty one) is always valid.
//!
//! # Key aliases
//!
//! The `[keys]` table adds names usable as `{"key": "NAME"}` in scripts and
//! `@NAME` on the command line.  Names are matched without regard to ASCII
//! case and take precedence over the built-in key table.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use synthkeys_core::Keysym;
use thiserror::Error;

use crate::application::debug_console::ConsoleSettings;
use crate::application::session::DEFAULT_BLOB_LENGTH;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field held a value outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub console: ConsoleSection,
    /// Extra key names, mapped to keysym values.
    #[serde(default)]
    pub keys: BTreeMap<String, u32>,
}

/// General console behaviour.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ConsoleSection {
    /// `tracing` level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Mimetype for argument value and pipe streams.
    #[serde(default = "default_mimetype")]
    pub mimetype: String,
    /// Largest blob sent per stream chunk, in bytes.  Must be non-zero.
    #[serde(default = "default_blob_length")]
    pub blob_length: usize,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_mimetype() -> String {
    "text/plain".to_string()
}
fn default_blob_length() -> usize {
    DEFAULT_BLOB_LENGTH
}

impl Default for ConsoleSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            mimetype: default_mimetype(),
            blob_length: default_blob_length(),
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl ConsoleConfig {
    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Loads configuration from `path` if one is given, else returns defaults.
    ///
    /// # Errors
    ///
    /// As [`load`](Self::load).
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.console.blob_length == 0 {
            return Err(ConfigError::Invalid {
                field: "console.blob_length",
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(name) = self.keys.keys().find(|name| name.is_empty()) {
            return Err(ConfigError::Invalid {
                field: "keys",
                reason: format!("empty key name {name:?}"),
            });
        }
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();
        for name in self.keys.keys() {
            if let Some(previous) = seen.insert(name.to_ascii_uppercase(), name) {
                return Err(ConfigError::Invalid {
                    field: "keys",
                    reason: format!("key names {previous:?} and {name:?} differ only in case"),
                });
            }
        }
        Ok(())
    }

    /// Stream settings for the debug console.
    pub fn console_settings(&self) -> ConsoleSettings {
        ConsoleSettings {
            mimetype: self.console.mimetype.clone(),
            blob_length: self.console.blob_length,
        }
    }

    /// Key aliases as keysyms, with upper-cased names.
    pub fn key_aliases(&self) -> BTreeMap<String, Keysym> {
        self.keys
            .iter()
            .map(|(name, &value)| (name.to_ascii_uppercase(), Keysym(value)))
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
