//! Virtual-time timer queue with cancellable handles

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

/// Cancellation handle for a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// One-shot timers measured against the queue's own elapsed time
///
/// Time only moves through [`TimerQueue::advance`]. Timers fire in deadline
/// order; timers sharing a deadline fire in the order they were scheduled.
#[derive(Debug, Default)]
pub struct TimerQueue {
    elapsed: Duration,
    next_id: u64,
    order: BTreeSet<(Duration, TimerHandle)>,
    deadlines: HashMap<TimerHandle, Duration>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time advanced so far
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Schedule a timer `delay` from now
    pub fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let deadline = self.elapsed + delay;
        self.order.insert((deadline, handle));
        self.deadlines.insert(handle, deadline);
        handle
    }

    /// Cancel a pending timer; returns false if it already fired or was cancelled
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(deadline) => self.order.remove(&(deadline, handle)),
            None => false,
        }
    }

    pub fn deadline(&self, handle: TimerHandle) -> Option<Duration> {
        self.deadlines.get(&handle).copied()
    }

    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    /// Move time forward and return the timers that came due
    pub fn advance(&mut self, by: Duration) -> Vec<TimerHandle> {
        self.elapsed += by;

        let mut fired = Vec::new();
        while let Some(&(deadline, handle)) = self.order.first() {
            if deadline > self.elapsed {
                break;
            }
            self.order.remove(&(deadline, handle));
            self.deadlines.remove(&handle);
            fired.push(handle);
        }
        fired
    }
}
