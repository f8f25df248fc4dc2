//! Path resolution for hrdesk data files

use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const HOME_ENV: &str = "HRDESK_HOME";

/// Resolves standard paths under the hrdesk data directory
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve from `$HRDESK_HOME`, falling back to `~/.hrdesk`
    pub fn new() -> std::io::Result<Self> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_data_dir(dir));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self::with_data_dir(home.join(".hrdesk")))
    }

    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
        }
    }

    /// Directory holding one file per storage key
    pub fn storage_dir(&self) -> PathBuf {
        self.data_dir.join("storage")
    }

    /// Optional configuration file
    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }
}
