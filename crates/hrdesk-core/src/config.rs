//! Configuration for the session event model

use crate::palette::default_commands;
use crate::types::CommandItem;
use hrdesk_store::{ACTIVITY_LOG_KEY, BUG_REPORTS_KEY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(
        "warningBeforeMs ({warning_before_ms}) must be less than idleAfterMs ({idle_after_ms})"
    )]
    WarningWindow {
        idle_after_ms: u64,
        warning_before_ms: u64,
    },

    #[error("storage key `{0}` must not be empty")]
    EmptyKey(&'static str),
}

/// Idle watcher timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdleConfig {
    /// Inactivity before the session counts as expired
    pub idle_after_ms: u64,

    /// Length of the warning window before expiry
    pub warning_before_ms: u64,
}

impl IdleConfig {
    pub fn new(idle_after_ms: u64, warning_before_ms: u64) -> Self {
        Self {
            idle_after_ms,
            warning_before_ms,
        }
    }

    pub fn idle_after(&self) -> Duration {
        Duration::from_millis(self.idle_after_ms)
    }

    /// Delay from the last reset until the warning fires, clamped at zero
    pub fn warning_delay(&self) -> Duration {
        Duration::from_millis(self.idle_after_ms.saturating_sub(self.warning_before_ms))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.warning_before_ms >= self.idle_after_ms {
            return Err(ConfigError::WarningWindow {
                idle_after_ms: self.idle_after_ms,
                warning_before_ms: self.warning_before_ms,
            });
        }
        Ok(())
    }
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self::new(5 * 60 * 1000, 30 * 1000)
    }
}

/// Top-level configuration, read from `config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub idle: IdleConfig,

    /// Command palette entries in display order
    pub commands: Vec<CommandItem>,

    pub activity_log_key: String,

    pub bug_reports_key: String,

    /// Reported on bug reports in place of a browser user agent
    pub user_agent: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            idle: IdleConfig::default(),
            commands: default_commands(),
            activity_log_key: ACTIVITY_LOG_KEY.to_string(),
            bug_reports_key: BUG_REPORTS_KEY.to_string(),
            user_agent: format!("hrdesk/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.idle.validate()?;
        if self.activity_log_key.is_empty() {
            return Err(ConfigError::EmptyKey("activityLogKey"));
        }
        if self.bug_reports_key.is_empty() {
            return Err(ConfigError::EmptyKey("bugReportsKey"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
