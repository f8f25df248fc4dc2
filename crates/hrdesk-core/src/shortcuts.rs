//! Keyboard shortcut help overlay

use crate::input::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub keys: &'static str,
    pub action: &'static str,
}

pub const SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        keys: "?",
        action: "Open this panel",
    },
    Shortcut {
        keys: "Esc",
        action: "Close panel",
    },
    Shortcut {
        keys: "Ctrl/Cmd+K",
        action: "Command palette",
    },
];

/// Opened with `?`, closed with Escape
#[derive(Debug, Clone, Default)]
pub struct ShortcutHelp {
    open: bool,
}

impl ShortcutHelp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns true when the key opened or closed the overlay
    ///
    /// `?` with Ctrl or Meta held belongs to the command chord and is ignored.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.is_char_ignore_case('?') && !key.is_command_chord() {
            self.open = true;
            return true;
        }
        if key.code == KeyCode::Escape {
            self.open = false;
            return true;
        }
        false
    }

    pub fn entries(&self) -> &'static [Shortcut] {
        SHORTCUTS
    }
}
