//! Configuration management for specindex.
//!
//! Every setting has a default that reproduces the standard layout
//! (`media/` assets, `nav#TOC` tables of contents, `manifest.json` and
//! `search_data.json` outputs). An optional `specindex.toml` in the
//! document root overrides individual values.

use crate::core::error::{IndexError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the document root
pub const CONFIG_FILE_NAME: &str = "specindex.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub walk: WalkConfig,
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Directory walk configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WalkConfig {
    /// Directory name holding non-document assets (skipped)
    #[serde(default = "default_asset_dir")]
    pub asset_dir: String,

    /// Name prefix marking hidden/system directories (skipped)
    #[serde(default = "default_hidden_prefix")]
    pub hidden_prefix: String,

    /// Glob matched against file names to select documents
    #[serde(default = "default_document_pattern")]
    pub document_pattern: String,
}

/// Per-document parsing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentConfig {
    /// `id` of the `<nav>` element holding the table of contents
    #[serde(default = "default_toc_id")]
    pub toc_id: String,

    /// Suffix of the record covering the whole table of contents
    #[serde(default = "default_toc_record_suffix")]
    pub toc_record_suffix: String,

    /// Title used when a file name reduces to nothing
    #[serde(default = "default_fallback_title")]
    pub fallback_title: String,
}

/// Output artifact configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    #[serde(default = "default_search_data_file")]
    pub search_data_file: String,
}

// Default value functions
fn default_asset_dir() -> String {
    "media".to_string()
}

fn default_hidden_prefix() -> String {
    ".".to_string()
}

fn default_document_pattern() -> String {
    "*.html".to_string()
}

fn default_toc_id() -> String {
    "TOC".to_string()
}

fn default_toc_record_suffix() -> String {
    "TOC_entire".to_string()
}

fn default_fallback_title() -> String {
    "Main".to_string()
}

fn default_manifest_file() -> String {
    "manifest.json".to_string()
}

fn default_search_data_file() -> String {
    "search_data.json".to_string()
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            asset_dir: default_asset_dir(),
            hidden_prefix: default_hidden_prefix(),
            document_pattern: default_document_pattern(),
        }
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            toc_id: default_toc_id(),
            toc_record_suffix: default_toc_record_suffix(),
            fallback_title: default_fallback_title(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            manifest_file: default_manifest_file(),
            search_data_file: default_search_data_file(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| IndexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config for a document root
    ///
    /// Uses `<root>/specindex.toml` when present, defaults otherwise.
    /// The result is validated before being returned.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE_NAME);
        let config = if config_path.is_file() {
            tracing::debug!("Loading configuration from {:?}", config_path);
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.walk.hidden_prefix.is_empty() {
            // An empty prefix would match every directory name
            return Err(IndexError::ConfigError(
                "Hidden directory prefix must be non-empty".to_string(),
            ));
        }

        glob::Pattern::new(&self.walk.document_pattern).map_err(|e| {
            IndexError::ConfigError(format!(
                "Invalid document pattern '{}': {e}",
                self.walk.document_pattern
            ))
        })?;

        if self.document.toc_id.is_empty() {
            return Err(IndexError::ConfigError(
                "TOC id must be non-empty".to_string(),
            ));
        }

        if self.document.toc_record_suffix.is_empty() {
            return Err(IndexError::ConfigError(
                "TOC record suffix must be non-empty".to_string(),
            ));
        }

        for (key, name) in [
            ("manifest_file", &self.output.manifest_file),
            ("search_data_file", &self.output.search_data_file),
        ] {
            if name.is_empty() || name.contains('/') || name.contains('\\') {
                return Err(IndexError::ConfigError(format!(
                    "Output {key} must be a plain file name, got '{name}'"
                )));
            }
        }

        if self.output.manifest_file == self.output.search_data_file {
            return Err(IndexError::ConfigError(
                "Manifest and search data must be written to different files".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Asset dir: {}", self.walk.asset_dir);
        tracing::debug!("  Hidden prefix: {}", self.walk.hidden_prefix);
        tracing::debug!("  Document pattern: {}", self.walk.document_pattern);
        tracing::debug!("  TOC id: {}", self.document.toc_id);
        tracing::debug!("  Manifest file: {}", self.output.manifest_file);
        tracing::debug!("  Search data file: {}", self.output.search_data_file);
    }
}
