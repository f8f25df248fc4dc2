//! Core types for the session event model

use serde::{Deserialize, Serialize};

/// Idle watcher state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionState {
    /// Recent input, no banner
    Active,
    /// Inside the warning window, banner shown
    Warning,
    /// Idle timeout reached; informational only
    Expired,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SessionState::Active => "ACTIVE",
            SessionState::Warning => "WARNING",
            SessionState::Expired => "EXPIRED",
        };
        f.write_str(label)
    }
}

/// A command palette entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandItem {
    pub label: String,
    pub path: String,
}

impl CommandItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Case-insensitive substring match on the label
    pub fn matches(&self, query: &str) -> bool {
        self.label.to_lowercase().contains(&query.to_lowercase())
    }
}
