use crate::sequence_processor::ReadWindow;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_window_start")]
    pub window_start: u64,
    #[serde(default = "default_window_end")]
    pub window_end: u64,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_window_start() -> u64 {
    1
}

fn default_window_end() -> u64 {
    3000
}

fn default_extensions() -> Vec<String> {
    vec!["fastq".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_start: default_window_start(),
            window_end: default_window_end(),
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Location of `config.toml` in the user config directory.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("com", "platform-features", "platform-features")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Reads `config.toml` from the user config directory, or the defaults
    /// when there is none.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(config_path) => Self::load_from(&config_path),
            None => Ok(Config::default()),
        }
    }

    /// Reads `config_path`; a missing file gives the defaults, an unreadable
    /// or invalid one is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Writes this configuration to the user config directory.
    pub fn save(&self) -> Result<PathBuf> {
        let config_path =
            Self::path().context("No home directory to store the configuration in")?;
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        Ok(config_path)
    }

    pub fn window(&self) -> ReadWindow {
        ReadWindow::new(self.window_start, self.window_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = Config::from_toml("window_end = 0\n").unwrap();
        assert_eq!(config.window_start, 1);
        assert_eq!(config.window_end, 0);
        assert_eq!(config.extensions, vec!["fastq"]);
        assert_eq!(config.window(), ReadWindow::new(1, 0));
    }

    #[test]
    fn test_round_trip_defaults() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), Config::default());
        assert_eq!(Config::default().window(), ReadWindow::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(Config::from_toml("window_start = \"first\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        assert_eq!(Config::load_from(&config_path).unwrap(), Config::default());

        fs::write(&config_path, "window_start = 5\nwindow_end = 50\n").unwrap();
        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.window(), ReadWindow::new(5, 50));

        fs::write(&config_path, "window_start = [").unwrap();
        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid config"));
    }

    #[test]
    fn test_unreadable_config_is_an_error() {
        // A directory in place of the file cannot be read
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config"));
    }
}
