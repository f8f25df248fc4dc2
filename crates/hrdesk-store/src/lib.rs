//! Key-value persistence for the hrdesk session event model

mod adapter;
mod error;
mod io;
mod kv;
mod paths;
mod types;

pub use adapter::PersistenceAdapter;
pub use error::StoreError;
pub use io::{atomic_write, read_jsonl, read_jsonl_strict};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use paths::{Paths, HOME_ENV};
pub use types::{ActivityEvent, ActivityKind, BugReport, ACTIVITY_LOG_KEY, BUG_REPORTS_KEY};
