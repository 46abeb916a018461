//! Storage configuration loading.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration for the storage location.
///
/// Lives at `<config dir>/cookbook/config.toml`. A missing file means
/// defaults; an unreadable one is an error so a typo does not silently
/// send recipes to the wrong directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the default storage directory.
    pub storage_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Loads the config from the standard location, or defaults.
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads the config from an explicit path; missing file = defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// The storage directory to use, falling back to the default.
    pub fn storage_dir(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(default_storage_dir)
    }
}

/// Standard config file location.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cookbook").join("config.toml"))
}

/// Default storage directory when no override is configured.
fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cookbook")
        .join("Database")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let config = StorageConfig::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert!(config.storage_path.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "storage_path = \"/recipes\"\n").unwrap();
        let config = StorageConfig::load_from(&path).unwrap();
        assert_eq!(config.storage_dir(), PathBuf::from("/recipes"));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "storage_path = [").unwrap();
        assert!(StorageConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_default_dir_without_override() {
        let config = StorageConfig::default();
        assert!(config.storage_dir().ends_with("Database"));
    }
}
