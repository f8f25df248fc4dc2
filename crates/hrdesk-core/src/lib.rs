//! Session event model: activity logging, idle watching, command palette and feedback capture

mod activity;
mod clock;
mod config;
mod connectivity;
mod feedback;
mod input;
mod palette;
mod session;
mod shortcuts;
mod timer;
mod types;

pub use activity::ActivityLogger;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, ConfigError, IdleConfig};
pub use connectivity::{OnlineStatus, OFFLINE_BANNER};
pub use feedback::{BugReportWidget, SubmitOutcome, FEEDBACK_SENT};
pub use input::{EventKind, HostEvent, KeyCode, KeyEvent, Modifiers};
pub use palette::{default_commands, CommandPalette, NO_MATCH};
pub use session::{IdleWatcher, SessionTransition, EXPIRY_MESSAGE};
pub use shortcuts::{Shortcut, ShortcutHelp, SHORTCUTS};
pub use timer::{TimerHandle, TimerQueue};
pub use types::{CommandItem, SessionState};
