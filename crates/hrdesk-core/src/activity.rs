//! Activity logger: page visits and section usage

use crate::clock::Clock;
use hrdesk_store::{ActivityEvent, PersistenceAdapter, StoreError, ACTIVITY_LOG_KEY};
use std::sync::Arc;

pub struct ActivityLogger {
    adapter: PersistenceAdapter,
    clock: Arc<dyn Clock>,
    key: String,
}

impl ActivityLogger {
    pub fn new(adapter: PersistenceAdapter, clock: Arc<dyn Clock>) -> Self {
        Self {
            adapter,
            clock,
            key: ACTIVITY_LOG_KEY.to_string(),
        }
    }

    /// Store the log under a different key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Log a navigation to `path`
    ///
    /// Named after the document title when it is non-empty, otherwise the
    /// path. Repeat visits are logged every time.
    pub fn record_page(&self, path: &str, title: Option<&str>) -> Result<ActivityEvent, StoreError> {
        let name = title.filter(|t| !t.is_empty()).unwrap_or(path);
        let event = ActivityEvent::page(name, path, self.clock.now());
        self.adapter.append(&self.key, &event)?;
        tracing::debug!(path, "page visit logged");
        Ok(event)
    }

    /// Log use of a named section; empty names are ignored
    pub fn log_section(&self, name: &str) -> Result<Option<ActivityEvent>, StoreError> {
        if name.is_empty() {
            return Ok(None);
        }
        let event = ActivityEvent::section(name, self.clock.now());
        self.adapter.append(&self.key, &event)?;
        Ok(Some(event))
    }

    /// Every stored event in append order
    pub fn all(&self) -> Vec<ActivityEvent> {
        self.adapter.load(&self.key)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.adapter.clear(&self.key)
    }
}

impl std::fmt::Debug for ActivityLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityLogger")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
