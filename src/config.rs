//! Configuration System
//!
//! Layered configuration: built-in defaults, the user's global config file,
//! workspace config files, then `FRAMETRACK__SECTION__KEY` environment
//! variables. Relative storage paths resolve against the workspace root.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::workspace_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where frames and exports live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".frametrack/store")
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("exports")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            export_dir: default_export_dir(),
        }
    }
}

impl StorageConfig {
    /// Resolve `(store_path, export_dir)` against the workspace root.
    pub fn resolve_paths(&self, workspace_root: &Path) -> (PathBuf, PathBuf) {
        (
            resolve(workspace_root, &self.store_path),
            resolve(workspace_root, &self.export_dir),
        )
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Snapshot memoization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Seconds a snapshot may be reused; 0 disables memoization
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_ttl_secs() -> u64 {
    5
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Storage: {0}")]
    Storage(String),
    #[error("View: {0}")]
    View(String),
    #[error("Logging: {0}")]
    Logging(String),
}

impl TrackerConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.storage.store_path.as_os_str().is_empty() {
            errors.push(ValidationError::Storage("Store path cannot be empty".to_string()));
        }
        if self.storage.export_dir.as_os_str().is_empty() {
            errors.push(ValidationError::Storage("Export directory cannot be empty".to_string()));
        }
        if self.view.page_size == 0 {
            errors.push(ValidationError::View("Page size must be at least 1".to_string()));
        }
        if let Err(e) = crate::logging::validate_format(&self.logging.format) {
            errors.push(ValidationError::Logging(e.to_string()));
        }
        if let Err(e) = crate::logging::validate_output(&self.logging.output) {
            errors.push(ValidationError::Logging(e.to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, folding all problems into one `ConfigError`.
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })
    }

    /// Render as TOML, for `frametrack init`.
    pub fn to_toml(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}
