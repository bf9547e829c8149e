//! Application configuration module
//!
//! Settings are persisted with `confy`, which picks the OS-specific config
//! directory and handles serialization.

use crate::constant::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_MAX_TABLE_CELLS};
use crate::diff::{DEFAULT_CONTEXT_LINES, DiffLimits};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Get the revision store directory.
    /// Falls back to a local "data" directory if platform dirs are unavailable
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.settings.data_dir {
            return dir.clone();
        }
        if let Some(proj_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME) {
            proj_dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from("data")
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            debug!("Using built-in settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Unchanged lines kept around each change in unified output
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    /// Largest LCS table a diff may allocate
    #[serde(default = "default_max_table_cells")]
    pub max_table_cells: usize,

    /// Revision store location; the platform data dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_context_lines() -> usize {
    DEFAULT_CONTEXT_LINES
}

fn default_max_table_cells() -> usize {
    DEFAULT_MAX_TABLE_CELLS
}

impl Settings {
    pub fn limits(&self) -> DiffLimits {
        DiffLimits::new(self.max_table_cells)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            context_lines: default_context_lines(),
            max_table_cells: default_max_table_cells(),
            data_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.context_lines, 3);
        assert_eq!(settings.max_table_cells, 25_000_000);
        assert_eq!(settings.data_dir, None);
        assert_eq!(settings.limits(), DiffLimits::default());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "context_lines": 1 }"#).unwrap();
        assert_eq!(settings.context_lines, 1);
        assert_eq!(settings.max_table_cells, 25_000_000);
        assert_eq!(settings.data_dir, None);

        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_data_dir_override() {
        let config = Config {
            settings: Settings {
                data_dir: Some(PathBuf::from("/srv/revisions")),
                ..Settings::default()
            },
        };
        assert_eq!(config.data_dir(), PathBuf::from("/srv/revisions"));
    }
}
