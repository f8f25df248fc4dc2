//! Host events delivered to mounted components
//!
//! These stand in for the browser's `window` events: route changes, keyboard
//! and pointer input, and connectivity changes. All derive `Serialize` and
//! `Deserialize` so sessions can be scripted and replayed.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Modifiers: u8 {
        const NONE = 0b0000;
        const SHIFT = 0b0001;
        const CTRL = 0b0010;
        const ALT = 0b0100;
        /// Cmd on macOS, Win elsewhere.
        const META = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// Key identity, independent of modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    Char(char),
    Escape,
    Enter,
    Backspace,
    Tab,
    Up,
    Down,
}

/// A key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub code: KeyCode,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Character key comparison ignoring case
    pub fn is_char_ignore_case(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch.to_lowercase().eq(c.to_lowercase()))
    }

    /// Ctrl or Meta held; the platform "command" chord
    pub fn is_command_chord(&self) -> bool {
        self.modifiers.intersects(Modifiers::CTRL | Modifiers::META)
    }
}

/// Listener categories a component can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Navigation,
    PointerMove,
    KeyDown,
    Click,
    Scroll,
    TouchStart,
    Connectivity,
}

impl EventKind {
    /// Inputs that count as user activity for the idle watcher
    pub const USER_INPUT: [EventKind; 5] = [
        EventKind::PointerMove,
        EventKind::KeyDown,
        EventKind::Click,
        EventKind::Scroll,
        EventKind::TouchStart,
    ];
}

/// An event raised by the host environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// The route resolved to a new path
    Navigate {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    PointerMove,
    Key(KeyEvent),
    Click,
    Scroll,
    TouchStart,
    Connectivity {
        online: bool,
    },
}

impl HostEvent {
    pub fn navigate(path: impl Into<String>) -> Self {
        HostEvent::Navigate {
            path: path.into(),
            title: None,
        }
    }

    pub fn key(code: KeyCode, modifiers: Modifiers) -> Self {
        HostEvent::Key(KeyEvent::new(code).with_modifiers(modifiers))
    }

    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::Navigate { .. } => EventKind::Navigation,
            HostEvent::PointerMove => EventKind::PointerMove,
            HostEvent::Key(_) => EventKind::KeyDown,
            HostEvent::Click => EventKind::Click,
            HostEvent::Scroll => EventKind::Scroll,
            HostEvent::TouchStart => EventKind::TouchStart,
            HostEvent::Connectivity { .. } => EventKind::Connectivity,
        }
    }

    pub fn is_user_input(&self) -> bool {
        EventKind::USER_INPUT.contains(&self.kind())
    }
}
