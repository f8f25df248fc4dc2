//! Mount registry pairing components with host event listeners

use crate::base::{Component, Context};
use hrdesk_core::{EventKind, HostEvent};
use std::time::Duration;

/// Identifies a mounted component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(u64);

/// Identifies one registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Listener {
    id: ListenerId,
    kind: EventKind,
    component: ComponentId,
}

struct Mounted {
    id: ComponentId,
    component: Box<dyn Component>,
    listeners: Vec<ListenerId>,
}

/// The application root: owns mounted components and their listeners
///
/// Each subscription registers exactly one listener on mount and removes
/// exactly that listener on unmount. Events reach listeners in mount order.
pub struct Shell {
    components: Vec<Mounted>,
    listeners: Vec<Listener>,
    next_id: u64,
    current_path: String,
}

impl Shell {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            components: Vec::new(),
            listeners: Vec::new(),
            next_id: 0,
            current_path: initial_path.into(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Mount a component, registering its listeners
    pub fn mount(&mut self, mut component: Box<dyn Component>) -> (ComponentId, Vec<String>) {
        let id = ComponentId(self.bump());
        let mut listener_ids = Vec::new();
        for &kind in component.subscriptions() {
            let listener = ListenerId(self.bump());
            self.listeners.push(Listener {
                id: listener,
                kind,
                component: id,
            });
            listener_ids.push(listener);
        }

        let ctx = Context {
            current_path: &self.current_path,
        };
        let notice = component.on_mount(&ctx);
        tracing::debug!(
            component = component.name(),
            listeners = listener_ids.len(),
            "mounted"
        );

        self.components.push(Mounted {
            id,
            component,
            listeners: listener_ids,
        });
        (id, notice.into_iter().collect())
    }

    /// Remove a component and its listeners; false if it was not mounted
    pub fn unmount(&mut self, id: ComponentId) -> bool {
        let Some(index) = self.components.iter().position(|m| m.id == id) else {
            return false;
        };
        let mut mounted = self.components.remove(index);
        self.listeners.retain(|l| !mounted.listeners.contains(&l.id));
        mounted.component.on_unmount();
        tracing::debug!(component = mounted.component.name(), "unmounted");
        true
    }

    /// Unmount everything, most recently mounted first
    pub fn unmount_all(&mut self) {
        while let Some(id) = self.components.last().map(|m| m.id) {
            self.unmount(id);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn listeners_for(&self, kind: EventKind) -> usize {
        self.listeners.iter().filter(|l| l.kind == kind).count()
    }

    /// Names of mounted components in mount order
    pub fn component_names(&self) -> Vec<&'static str> {
        self.components.iter().map(|m| m.component.name()).collect()
    }

    /// Deliver a host event to every listener of its kind
    ///
    /// Navigation updates the current path before any listener runs.
    pub fn dispatch(&mut self, event: &HostEvent) -> Vec<String> {
        if let HostEvent::Navigate { path, .. } = event {
            self.current_path.clone_from(path);
        }

        let kind = event.kind();
        let targets: Vec<ComponentId> = self
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| l.component)
            .collect();

        let ctx = Context {
            current_path: &self.current_path,
        };
        let mut notices = Vec::new();
        for target in targets {
            if let Some(mounted) = self.components.iter_mut().find(|m| m.id == target) {
                notices.extend(mounted.component.on_event(event, &ctx));
            }
        }
        notices
    }

    /// Advance host time for every mounted component
    pub fn advance(&mut self, elapsed: Duration) -> Vec<String> {
        self.components
            .iter_mut()
            .flat_map(|m| m.component.on_tick(elapsed))
            .collect()
    }

    fn bump(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        self.unmount_all();
    }
}
