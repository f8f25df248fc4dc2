#![allow(dead_code)]

use chrono::{DateTime, Utc};
use hrdesk_core::{ActivityLogger, BugReportWidget, ManualClock};
use hrdesk_store::{FileStore, MemoryStore, PersistenceAdapter};
use std::path::Path;
use std::sync::Arc;

pub fn start_time() -> DateTime<Utc> {
    "2025-03-03T09:00:00Z".parse().unwrap()
}

pub fn manual_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(start_time()))
}

pub fn memory_adapter() -> PersistenceAdapter {
    PersistenceAdapter::new(Arc::new(MemoryStore::new()))
}

pub fn file_adapter(dir: &Path) -> PersistenceAdapter {
    PersistenceAdapter::new(Arc::new(FileStore::new(dir)))
}

pub fn logger(adapter: &PersistenceAdapter, clock: &Arc<ManualClock>) -> ActivityLogger {
    ActivityLogger::new(adapter.clone(), clock.clone())
}

pub fn widget(adapter: &PersistenceAdapter, clock: &Arc<ManualClock>) -> BugReportWidget {
    BugReportWidget::new(adapter.clone(), clock.clone(), "hrdesk-tests")
}
