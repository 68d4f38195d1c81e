use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::notify::DEFAULT_TITLE;

/// Settings read from `<config_dir>/prioriti/config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub notifications: NotificationConfig,
    pub logging: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// When false the notification center refuses authorization.
    pub enabled: bool,
    /// Schedule a notification for every reminder as it is added.
    pub schedule_on_add: bool,
    pub title: String,
    /// Ring the terminal bell when a notification is delivered.
    pub sound: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            schedule_on_add: true,
            title: DEFAULT_TITLE.to_string(),
            sound: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter, overridden by `RUST_LOG`.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        match config_dir().map(|d| d.join("config.toml")) {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).wrap_err_with(|| format!("invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("prioriti"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.notifications.enabled);
        assert!(config.notifications.schedule_on_add);
        assert_eq!(config.notifications.title, "Prioriti Reminder");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
            [notifications]
            schedule_on_add = false
            sound = false

            [logging]
            level = "debug"
            file = "/tmp/prioriti.log"
            "#,
        )
        .unwrap();
        assert!(config.notifications.enabled);
        assert!(!config.notifications.schedule_on_add);
        assert!(!config.notifications.sound);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/prioriti.log")));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(Config::parse("[notifications]\nenabled = \"yes\"").is_err());
    }
}
