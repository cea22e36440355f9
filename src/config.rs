//! Persistent configuration
//!
//! Read from `config.toml` in the platform config directory, or from an explicit
//! path given on the command line. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::DrawError;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prompt shown by the interactive shell
    pub prompt: String,

    /// Greeting printed when the shell starts
    pub banner: String,

    /// Largest canvas (width * height) `C` will create
    pub max_cells: usize,

    /// Entries kept in the line editor history
    pub history_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: "(Canvas) ".to_string(),
            banner: "Starting Canvas 1.0...".to_string(),
            max_cells: 1_000_000,
            history_size: 100,
        }
    }
}

impl AppConfig {
    /// Directory holding the config file
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "ascii-draw", "ascii-draw")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Default config file location
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }
}

/// Load configuration from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, DrawError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match AppConfig::config_path() {
            Some(p) => p,
            None => return Ok(AppConfig::default()),
        },
    };

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| DrawError::Configuration(format!("Failed to read config: {e}")))?;

    toml::from_str(&content)
        .map_err(|e| DrawError::Configuration(format!("Invalid TOML config: {e}")))
}

/// Save configuration as pretty TOML, creating the directory if needed
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), DrawError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| DrawError::Configuration(format!("Failed to create config dir: {e}")))?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| DrawError::Configuration(format!("Failed to serialize config: {e}")))?;

    fs::write(path, content)
        .map_err(|e| DrawError::Configuration(format!("Failed to write config: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.prompt, "(Canvas) ");
        assert_eq!(config.max_cells, 1_000_000);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(Some(dir.path().join("nope.toml").as_path())).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "prompt = \"> \"\n").unwrap();
        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.history_size, 100);
    }

    #[test]
    fn test_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_cells = \"lots\"").unwrap();
        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, DrawError::Configuration(_)));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            max_cells: 64,
            ..AppConfig::default()
        };
        save_config(&config, &path).unwrap();
        assert_eq!(load_config(Some(path.as_path())).unwrap(), config);
    }
}
