//! Idle session watcher
//!
//! Tracks inactivity with two timers: a warning timer at
//! `idleAfterMs - warningBeforeMs` and an expiry timer at `idleAfterMs`. Any
//! monitored input cancels both and re-arms them from the input time. Expiry
//! is informational: it logs and clears the banner, session invalidation is
//! left to the host.

use crate::config::IdleConfig;
use crate::timer::{TimerHandle, TimerQueue};
use crate::types::SessionState;
use std::time::Duration;

/// Logged when the expiry timer fires
pub const EXPIRY_MESSAGE: &str = "user session expired due to inactivity";

/// State change produced by the watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTransition {
    /// Entered the warning window
    Warned,
    /// Idle timeout reached
    Expired,
    /// Input moved the session back to active from warning or expired
    Resumed,
}

/// The watcher's two pending timers
#[derive(Debug, Default)]
struct SessionTimers {
    warning: Option<TimerHandle>,
    expiry: Option<TimerHandle>,
}

impl SessionTimers {
    /// Cancel both timers and schedule fresh ones from the current time
    fn reset(&mut self, queue: &mut TimerQueue, config: &IdleConfig) {
        self.cancel(queue);
        self.warning = Some(queue.schedule(config.warning_delay()));
        self.expiry = Some(queue.schedule(config.idle_after()));
    }

    fn cancel(&mut self, queue: &mut TimerQueue) {
        for handle in [self.warning.take(), self.expiry.take()].into_iter().flatten() {
            queue.cancel(handle);
        }
    }
}

#[derive(Debug)]
pub struct IdleWatcher {
    config: IdleConfig,
    queue: TimerQueue,
    timers: SessionTimers,
    state: SessionState,
    show_warning: bool,
    last_reset: Duration,
    mounted: bool,
}

impl IdleWatcher {
    pub fn new(config: IdleConfig) -> Self {
        if let Err(err) = config.validate() {
            tracing::warn!(error = %err, "warning window is empty, warning fires immediately");
        }

        Self {
            config,
            queue: TimerQueue::new(),
            timers: SessionTimers::default(),
            state: SessionState::Active,
            show_warning: false,
            last_reset: Duration::ZERO,
            mounted: false,
        }
    }

    pub fn config(&self) -> &IdleConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the "session expiring" banner is visible
    pub fn show_warning(&self) -> bool {
        self.show_warning
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Timers still scheduled; zero once unmounted
    pub fn pending_timers(&self) -> usize {
        self.queue.pending()
    }

    /// Time since the last reset
    pub fn idle_for(&self) -> Duration {
        self.queue.elapsed().saturating_sub(self.last_reset)
    }

    /// Arm both timers
    pub fn mount(&mut self) {
        self.mounted = true;
        self.reset();
        tracing::debug!(
            idle_after_ms = self.config.idle_after_ms,
            warning_before_ms = self.config.warning_before_ms,
            "idle watcher armed"
        );
    }

    /// Cancel both timers; no timer fires after this
    pub fn unmount(&mut self) {
        self.timers.cancel(&mut self.queue);
        self.mounted = false;
        self.show_warning = false;
    }

    /// Monitored input: re-arm from now regardless of the current state
    pub fn record_input(&mut self) -> Option<SessionTransition> {
        if !self.mounted {
            return None;
        }
        let previous = self.state;
        self.reset();
        (previous != SessionState::Active).then_some(SessionTransition::Resumed)
    }

    /// The banner's "Stay logged in" action
    pub fn stay_logged_in(&mut self) -> Option<SessionTransition> {
        self.record_input()
    }

    /// Advance time and apply whichever timers came due
    pub fn advance(&mut self, by: Duration) -> Vec<SessionTransition> {
        let mut transitions = Vec::new();
        for handle in self.queue.advance(by) {
            if self.timers.warning == Some(handle) {
                self.timers.warning = None;
                self.state = SessionState::Warning;
                self.show_warning = true;
                transitions.push(SessionTransition::Warned);
            } else if self.timers.expiry == Some(handle) {
                self.timers.expiry = None;
                tracing::warn!(idle_ms = self.idle_for().as_millis() as u64, "{}", EXPIRY_MESSAGE);
                self.state = SessionState::Expired;
                self.show_warning = false;
                transitions.push(SessionTransition::Expired);
            }
        }
        transitions
    }

    fn reset(&mut self) {
        self.timers.reset(&mut self.queue, &self.config);
        self.state = SessionState::Active;
        self.show_warning = false;
        self.last_reset = self.queue.elapsed();
    }
}
