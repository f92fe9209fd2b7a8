//! Cycler configuration persistence
//!
//! Stores user preferences in `~/.config/case-cycle/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::case::DEFAULT_CYCLE;
use crate::cycle::CaseOrder;

/// Errors from writing the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no config directory available")]
    NoConfigDir,
    #[error("failed to write config to {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Style names to cycle through, in order (e.g. "original", "const", "camel")
    #[serde(default = "default_case_cycle")]
    pub case_cycle: Vec<String>,
    /// Show a notification naming the applied style after each conversion
    #[serde(default = "default_show_notifications")]
    pub show_notifications: bool,
}

fn default_case_cycle() -> Vec<String> {
    DEFAULT_CYCLE.iter().map(|v| v.name().to_string()).collect()
}

fn default_show_notifications() -> bool {
    true
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            case_cycle: default_case_cycle(),
            show_notifications: default_show_notifications(),
        }
    }
}

impl CycleConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from an explicit path, or return defaults if it is
    /// missing or malformed
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        };

        crate::config_paths::ensure_parent_dir(path).map_err(io_err)?;

        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(io_err)?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validated style order for the configured names
    pub fn case_order(&self) -> CaseOrder {
        CaseOrder::from_names(&self.case_cycle)
    }
}
