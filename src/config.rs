//! Configuration file loading and CLI override merging.
//!
//! Config files provide defaults (document metadata, output options) that
//! explicit CLI flags override. A missing config file is not an error.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::DocumentMetadata;
use crate::error::{DocumentError, Result};

/// Config file looked up in the working directory
pub const CONFIG_FILENAME: &str = "printmark.toml";

/// Config file looked up under the user config directory
pub const USER_CONFIG_PATH: &str = "printmark/config.toml";

// ============================================================
// Config
// ============================================================

/// Output options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print the serialized content model
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// File-backed configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default document metadata, merged under CLI overrides
    pub metadata: DocumentMetadata,

    /// Output options
    pub output: OutputConfig,
}

impl Config {
    /// Load from the default locations: `./printmark.toml` first, then the
    /// user config directory. Returns defaults when neither exists.
    pub fn load() -> Result<Config> {
        let local = Path::new(CONFIG_FILENAME);
        if local.exists() {
            return Self::load_from_path(local);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user = config_dir.join(USER_CONFIG_PATH);
            if user.exists() {
                return Self::load_from_path(&user);
            }
        }

        Ok(Config::default())
    }

    /// Load from an explicit path
    pub fn load_from_path(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| DocumentError::Config(e.to_string()))
    }

    /// Merge with CLI overrides; explicit CLI values take precedence.
    #[must_use]
    pub fn merge_with_cli(&self, overrides: &CliOverrides) -> Config {
        let mut merged = self.clone();
        merged.metadata = self.metadata.merge(&overrides.metadata);
        if let Some(pretty) = overrides.pretty {
            merged.output.pretty = pretty;
        }
        merged
    }
}

/// Values the user set explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Metadata fields provided as flags
    pub metadata: DocumentMetadata,

    /// Pretty-printing, when the user passed a flag for it
    pub pretty: Option<bool>,
}

impl CliOverrides {
    /// Create empty overrides
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================
// Tests
// ============================================================
