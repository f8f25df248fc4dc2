//! Persisted record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default key for the activity log collection
pub const ACTIVITY_LOG_KEY: &str = "nhp_activity_log";

/// Default key for the bug report collection
pub const BUG_REPORTS_KEY: &str = "nhp_bug_reports";

/// What an activity event records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// A navigation to a new path
    Page,
    /// Explicit use of a named section
    Section,
}

/// A logged page visit or section use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub time: DateTime<Utc>,
}

impl ActivityEvent {
    pub fn page(name: impl Into<String>, path: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            kind: ActivityKind::Page,
            name: name.into(),
            path: Some(path.into()),
            time,
        }
    }

    pub fn section(name: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            kind: ActivityKind::Section,
            name: name.into(),
            path: None,
            time,
        }
    }
}

/// User feedback captured with the context it was filed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BugReport {
    pub message: String,
    pub page: String,
    pub user_agent: String,
    pub time: DateTime<Utc>,
}
