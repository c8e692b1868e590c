//! Configuration loading
//!
//! Configuration is read from `$XDG_CONFIG_HOME/callboard/config.toml`
//! (`~/.config/callboard/config.toml`). A missing file means defaults.
//! Logs go to `$XDG_STATE_HOME/callboard/` (`~/.local/state/callboard/`).

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct DashboardConfig {
    /// Initial selection: "All days", a day key, or a unique prefix of one
    pub default_day: Option<String>,

    /// Window of the trailing moving average drawn over daily volume
    #[serde(default = "default_moving_average_window")]
    pub moving_average_window: usize,

    /// JSON dataset to load instead of the bundled one
    pub data_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_day: None,
            moving_average_window: default_moving_average_window(),
            data_path: None,
        }
    }
}

fn default_moving_average_window() -> usize {
    7
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load from the default path, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dashboard.moving_average_window == 0 {
            return Err(Error::Config(
                "dashboard.moving_average_window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// `$XDG_CONFIG_HOME/callboard/config.toml`
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("callboard").join("config.toml")
    }

    /// `$XDG_STATE_HOME/callboard/`
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("callboard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dashboard.moving_average_window, 7);
        assert!(config.dashboard.default_day.is_none());
        assert!(config.dashboard.data_path.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[dashboard]
default_day = "4th dec"
moving_average_window = 3
data_path = "/tmp/calls.json"

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.dashboard.default_day.as_deref(), Some("4th dec"));
        assert_eq!(config.dashboard.moving_average_window, 3);
        assert_eq!(
            config.dashboard.data_path,
            Some(PathBuf::from("/tmp/calls.json"))
        );
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(config.dashboard.moving_average_window, 7);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_zero_window_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\nmoving_average_window = 0").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unparseable_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard\nnot toml").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
