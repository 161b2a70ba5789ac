//! Bot configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Runtime settings for the games bot.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct BotConfig {
    /// Display name of the engine-controlled seat.
    #[serde(default = "default_bot_name")]
    #[setters(into)]
    bot_name: String,

    /// Seconds without input before a game times out.
    #[serde(default = "default_idle_timeout_secs")]
    idle_timeout_secs: u64,

    /// Sokoban level file; the built-in levels are used when unset.
    #[serde(default)]
    #[setters(strip_option, into)]
    levels_path: Option<PathBuf>,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    #[setters(into)]
    log_filter: String,
}

fn default_bot_name() -> String {
    "ChezziBot".to_string()
}

fn default_idle_timeout_secs() -> u64 {
    180
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            idle_timeout_secs: default_idle_timeout_secs(),
            levels_path: None,
            log_filter: default_log_filter(),
        }
    }
}

impl BotConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.idle_timeout_secs == 0 {
            return Err(ConfigError::new(
                "idle_timeout_secs must be greater than zero".to_string(),
            ));
        }
        info!(bot_name = %config.bot_name, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` when it exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Idle timeout as a [`Duration`].
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a configuration error tagged with the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = BotConfig::from_toml_str("bot_name = \"Referee\"").unwrap();
        assert_eq!(config.bot_name(), "Referee");
        assert_eq!(config.idle_timeout(), Duration::from_secs(180));
        assert_eq!(config.log_filter(), "info");
        assert!(config.levels_path().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "idle_timeout_secs = 30").unwrap();
        writeln!(file, "levels_path = \"levels.json\"").unwrap();

        let config = BotConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.idle_timeout_secs(), 30);
        assert_eq!(
            config.levels_path().as_deref(),
            Some(Path::new("levels.json"))
        );
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BotConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, BotConfig::default());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = BotConfig::from_toml_str("idle_timeout_secs = 0").unwrap_err();
        assert!(err.message.contains("greater than zero"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_setters_override() {
        let config = BotConfig::default()
            .with_idle_timeout_secs(5)
            .with_levels_path("custom.json");
        assert_eq!(config.idle_timeout(), Duration::from_secs(5));
        assert_eq!(
            config.levels_path().as_deref(),
            Some(Path::new("custom.json"))
        );
    }
}
