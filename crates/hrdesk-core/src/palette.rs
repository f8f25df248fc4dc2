//! Command palette: Ctrl/Cmd+K quick navigation

use crate::input::KeyEvent;
use crate::types::CommandItem;

/// Shown in place of an empty result list
pub const NO_MATCH: &str = "No matching command";

/// The built-in navigation targets, in display order
pub fn default_commands() -> Vec<CommandItem> {
    vec![
        CommandItem::new("Dashboard", "/"),
        CommandItem::new("Attendance", "/attendance"),
        CommandItem::new("Leave Management", "/leave"),
        CommandItem::new("Employees", "/employees"),
        CommandItem::new("Reports", "/reports"),
    ]
}

#[derive(Debug, Clone)]
pub struct CommandPalette {
    commands: Vec<CommandItem>,
    open: bool,
    query: String,
}

impl CommandPalette {
    pub fn new(commands: Vec<CommandItem>) -> Self {
        Self {
            commands,
            open: false,
            query: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn commands(&self) -> &[CommandItem] {
        &self.commands
    }

    /// Toggle on Ctrl+K or Cmd+K; returns true when the key was consumed
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.is_command_chord() && key.is_char_ignore_case('k') {
            self.toggle();
            return true;
        }
        false
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Commands whose label contains the query, ignoring case
    pub fn filtered(&self) -> Vec<&CommandItem> {
        self.commands
            .iter()
            .filter(|item| item.matches(&self.query))
            .collect()
    }

    /// True when the query matches nothing
    pub fn no_match(&self) -> bool {
        !self.commands.iter().any(|item| item.matches(&self.query))
    }

    /// Pick the `index`th filtered command
    ///
    /// Returns the path to navigate to, closing the palette and clearing the
    /// query. Nothing happens while closed or when `index` is out of range.
    pub fn select(&mut self, index: usize) -> Option<String> {
        if !self.open {
            return None;
        }
        let path = self.filtered().get(index)?.path.clone();
        self.open = false;
        self.query.clear();
        Some(path)
    }
}

impl Default for CommandPalette {
    fn default() -> Self {
        Self::new(default_commands())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, Modifiers};

    fn labels(palette: &CommandPalette) -> Vec<&str> {
        palette
            .filtered()
            .into_iter()
            .map(|c| c.label.as_str())
            .collect()
    }

    #[test]
    fn test_closed_by_default() {
        assert!(!CommandPalette::default().is_open());
    }

    #[test]
    fn test_hotkey_toggles() {
        let mut palette = CommandPalette::default();
        let ctrl_k = KeyEvent::new(KeyCode::Char('k')).with_modifiers(Modifiers::CTRL);
        let cmd_k = KeyEvent::new(KeyCode::Char('K')).with_modifiers(Modifiers::META);

        assert!(palette.handle_key(&ctrl_k));
        assert!(palette.is_open());
        assert!(palette.handle_key(&cmd_k));
        assert!(!palette.is_open());
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut palette = CommandPalette::default();
        let plain_k = KeyEvent::new(KeyCode::Char('k'));
        let ctrl_j = KeyEvent::new(KeyCode::Char('j')).with_modifiers(Modifiers::CTRL);

        assert!(!palette.handle_key(&plain_k));
        assert!(!palette.handle_key(&ctrl_j));
        assert!(!palette.is_open());
    }

    #[test]
    fn test_empty_query_lists_everything_in_order() {
        let palette = CommandPalette::default();
        assert_eq!(
            labels(&palette),
            vec![
                "Dashboard",
                "Attendance",
                "Leave Management",
                "Employees",
                "Reports"
            ]
        );
        assert!(!palette.no_match());
    }

    #[test]
    fn test_atten_matches_attendance_only() {
        let mut palette = CommandPalette::default();
        palette.set_query("atten");
        assert_eq!(labels(&palette), vec!["Attendance"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let mut palette = CommandPalette::default();
        palette.set_query("EMP");
        assert_eq!(labels(&palette), vec!["Employees"]);
    }

    #[test]
    fn test_no_match_indicator() {
        let mut palette = CommandPalette::default();
        palette.set_query("zzz");
        assert!(palette.filtered().is_empty());
        assert!(palette.no_match());
    }

    #[test]
    fn test_select_navigates_and_resets() {
        let mut palette = CommandPalette::default();
        palette.toggle();
        palette.set_query("rep");

        assert_eq!(palette.select(0), Some("/reports".to_string()));
        assert!(!palette.is_open());
        assert_eq!(palette.query(), "");
    }

    #[test]
    fn test_select_out_of_range_or_closed() {
        let mut palette = CommandPalette::default();
        assert_eq!(palette.select(0), None);

        palette.toggle();
        palette.set_query("zzz");
        assert_eq!(palette.select(0), None);
        assert!(palette.is_open());
        assert_eq!(palette.query(), "zzz");
    }

    #[test]
    fn test_hotkey_close_keeps_query() {
        let mut palette = CommandPalette::default();
        palette.toggle();
        palette.set_query("lea");
        palette.toggle();

        assert_eq!(palette.query(), "lea");
    }
}
