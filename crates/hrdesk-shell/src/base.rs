//! Base component trait and sharing helpers

use hrdesk_core::{EventKind, HostEvent};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// What the shell knows when calling into a component
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Path of the route currently shown
    pub current_path: &'a str,
}

/// Something mounted at the application root that reacts to host events
///
/// Hooks may return user-facing notices; the shell collects them in call
/// order.
pub trait Component: Send {
    /// Component name (unique identifier)
    fn name(&self) -> &'static str;

    /// Event kinds to register listeners for
    fn subscriptions(&self) -> &'static [EventKind];

    /// Called once when mounted
    fn on_mount(&mut self, _ctx: &Context<'_>) -> Option<String> {
        None
    }

    /// Called for every event of a subscribed kind
    fn on_event(&mut self, event: &HostEvent, ctx: &Context<'_>) -> Option<String>;

    /// Called when host time advances
    fn on_tick(&mut self, _elapsed: Duration) -> Vec<String> {
        Vec::new()
    }

    /// Called once when unmounted, after its listeners are removed
    fn on_unmount(&mut self) {}
}

/// A component the caller keeps a handle to after mounting
pub type Shared<C> = Arc<Mutex<C>>;

pub fn shared<C>(component: C) -> Shared<C> {
    Arc::new(Mutex::new(component))
}

/// Lock a shared component, recovering the value if a holder panicked
pub fn lock<C: ?Sized>(component: &Mutex<C>) -> MutexGuard<'_, C> {
    component.lock().unwrap_or_else(|p| p.into_inner())
}

impl<C: Component> Component for Shared<C> {
    fn name(&self) -> &'static str {
        lock(self).name()
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        lock(self).subscriptions()
    }

    fn on_mount(&mut self, ctx: &Context<'_>) -> Option<String> {
        lock(self).on_mount(ctx)
    }

    fn on_event(&mut self, event: &HostEvent, ctx: &Context<'_>) -> Option<String> {
        lock(self).on_event(event, ctx)
    }

    fn on_tick(&mut self, elapsed: Duration) -> Vec<String> {
        lock(self).on_tick(elapsed)
    }

    fn on_unmount(&mut self) {
        lock(self).on_unmount()
    }
}
