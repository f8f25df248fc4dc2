//! Component adapters for the built-in session features

use crate::base::{Component, Context};
use hrdesk_core::{
    ActivityLogger, BugReportWidget, CommandPalette, EventKind, HostEvent, IdleWatcher,
    OnlineStatus, SessionTransition, ShortcutHelp, EXPIRY_MESSAGE,
};
use std::time::Duration;

/// Notice raised when the idle warning banner appears
pub const EXPIRING_NOTICE: &str =
    "Session expiring: you have been inactive for a while. Your session will expire soon.";

/// Notice raised when connectivity returns
pub const ONLINE_NOTICE: &str = "Back online";

const NAVIGATION: &[EventKind] = &[EventKind::Navigation];
const KEYS: &[EventKind] = &[EventKind::KeyDown];
const CONNECTIVITY: &[EventKind] = &[EventKind::Connectivity];

/// Page visits are fire-and-forget; storage failures are logged and dropped
fn log_visit(logger: &ActivityLogger, path: &str, title: Option<&str>) {
    if let Err(err) = logger.record_page(path, title) {
        tracing::warn!(path, error = %err, "failed to log page visit");
    }
}

impl Component for ActivityLogger {
    fn name(&self) -> &'static str {
        "activity-logger"
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        NAVIGATION
    }

    /// The initial route counts as a visit
    fn on_mount(&mut self, ctx: &Context<'_>) -> Option<String> {
        log_visit(self, ctx.current_path, None);
        None
    }

    fn on_event(&mut self, event: &HostEvent, _ctx: &Context<'_>) -> Option<String> {
        if let HostEvent::Navigate { path, title } = event {
            log_visit(self, path, title.as_deref());
        }
        None
    }
}

impl Component for IdleWatcher {
    fn name(&self) -> &'static str {
        "session-idle-watcher"
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        &EventKind::USER_INPUT
    }

    fn on_mount(&mut self, _ctx: &Context<'_>) -> Option<String> {
        self.mount();
        None
    }

    fn on_event(&mut self, _event: &HostEvent, _ctx: &Context<'_>) -> Option<String> {
        self.record_input();
        None
    }

    fn on_tick(&mut self, elapsed: Duration) -> Vec<String> {
        self.advance(elapsed)
            .into_iter()
            .filter_map(|transition| match transition {
                SessionTransition::Warned => Some(EXPIRING_NOTICE.to_string()),
                SessionTransition::Expired => Some(EXPIRY_MESSAGE.to_string()),
                SessionTransition::Resumed => None,
            })
            .collect()
    }

    fn on_unmount(&mut self) {
        self.unmount();
    }
}

impl Component for CommandPalette {
    fn name(&self) -> &'static str {
        "command-palette"
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        KEYS
    }

    fn on_event(&mut self, event: &HostEvent, _ctx: &Context<'_>) -> Option<String> {
        if let HostEvent::Key(key) = event {
            self.handle_key(key);
        }
        None
    }

    fn on_unmount(&mut self) {
        self.close();
    }
}

impl Component for BugReportWidget {
    fn name(&self) -> &'static str {
        "bug-report-widget"
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        NAVIGATION
    }

    fn on_mount(&mut self, ctx: &Context<'_>) -> Option<String> {
        self.set_page(ctx.current_path);
        None
    }

    fn on_event(&mut self, _event: &HostEvent, ctx: &Context<'_>) -> Option<String> {
        self.set_page(ctx.current_path);
        None
    }
}

impl Component for ShortcutHelp {
    fn name(&self) -> &'static str {
        "shortcut-help"
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        KEYS
    }

    fn on_event(&mut self, event: &HostEvent, _ctx: &Context<'_>) -> Option<String> {
        if let HostEvent::Key(key) = event {
            self.handle_key(key);
        }
        None
    }

    fn on_unmount(&mut self) {
        self.close();
    }
}

impl Component for OnlineStatus {
    fn name(&self) -> &'static str {
        "online-status"
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        CONNECTIVITY
    }

    fn on_event(&mut self, event: &HostEvent, _ctx: &Context<'_>) -> Option<String> {
        let HostEvent::Connectivity { online } = event else {
            return None;
        };
        if !self.set_online(*online) {
            return None;
        }
        match self.banner() {
            Some(banner) => Some(banner.to_string()),
            None => Some(ONLINE_NOTICE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{lock, shared};
    use crate::registry::Shell;
    use hrdesk_core::{
        IdleConfig, KeyCode, ManualClock, Modifiers, SessionState, SubmitOutcome, OFFLINE_BANNER,
    };
    use hrdesk_store::{ActivityKind, PersistenceAdapter};
    use std::sync::Arc;

    fn clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new("2025-06-02T08:00:00Z".parse().unwrap()))
    }

    #[test]
    fn test_logger_logs_initial_route_and_each_navigation() {
        let adapter = PersistenceAdapter::in_memory();
        let logger = shared(ActivityLogger::new(adapter.clone(), clock()));
        let mut shell = Shell::new("/");
        shell.mount(Box::new(logger.clone()));

        shell.dispatch(&HostEvent::navigate("/attendance"));
        shell.dispatch(&HostEvent::navigate("/attendance"));

        let paths: Vec<_> = lock(&logger)
            .all()
            .into_iter()
            .map(|e| e.path.unwrap_or_default())
            .collect();
        assert_eq!(paths, vec!["/", "/attendance", "/attendance"]);
    }

    #[test]
    fn test_watcher_listens_to_all_inputs() {
        let mut shell = Shell::default();
        let (id, _) = shell.mount(Box::new(IdleWatcher::new(IdleConfig::default())));

        for kind in EventKind::USER_INPUT {
            assert_eq!(shell.listeners_for(kind), 1, "{kind:?}");
        }
        shell.unmount(id);
        assert_eq!(shell.listener_count(), 0);
    }

    #[test]
    fn test_watcher_ticks_produce_notices() {
        let watcher = shared(IdleWatcher::new(IdleConfig::new(1000, 200)));
        let mut shell = Shell::default();
        shell.mount(Box::new(watcher.clone()));

        assert_eq!(
            shell.advance(Duration::from_millis(800)),
            vec![EXPIRING_NOTICE.to_string()]
        );
        shell.dispatch(&HostEvent::PointerMove);
        assert_eq!(lock(&watcher).state(), SessionState::Active);

        let notices = shell.advance(Duration::from_millis(1000));
        assert_eq!(
            notices,
            vec![EXPIRING_NOTICE.to_string(), EXPIRY_MESSAGE.to_string()]
        );
        assert_eq!(lock(&watcher).state(), SessionState::Expired);
    }

    #[test]
    fn test_watcher_timers_cancelled_on_unmount() {
        let watcher = shared(IdleWatcher::new(IdleConfig::default()));
        let mut shell = Shell::default();
        let (id, _) = shell.mount(Box::new(watcher.clone()));
        assert_eq!(lock(&watcher).pending_timers(), 2);

        shell.unmount(id);

        assert_eq!(lock(&watcher).pending_timers(), 0);
    }

    #[test]
    fn test_palette_toggles_from_host_keys() {
        let palette = shared(CommandPalette::default());
        let mut shell = Shell::default();
        shell.mount(Box::new(palette.clone()));

        shell.dispatch(&HostEvent::key(KeyCode::Char('k'), Modifiers::CTRL));
        assert!(lock(&palette).is_open());

        shell.dispatch(&HostEvent::key(KeyCode::Char('k'), Modifiers::META));
        assert!(!lock(&palette).is_open());
    }

    #[test]
    fn test_bug_report_filed_against_current_route() {
        let adapter = PersistenceAdapter::in_memory();
        let widget = shared(BugReportWidget::new(adapter, clock(), "test-agent"));
        let mut shell = Shell::new("/");
        shell.mount(Box::new(widget.clone()));

        shell.dispatch(&HostEvent::navigate("/employees"));

        let mut widget = lock(&widget);
        widget.set_message("Avatar missing");
        let SubmitOutcome::Sent(report) = widget.submit().unwrap() else {
            panic!("expected report to be sent");
        };
        assert_eq!(report.page, "/employees");
    }

    #[test]
    fn test_shortcut_help_from_host_keys() {
        let help = shared(ShortcutHelp::new());
        let mut shell = Shell::default();
        shell.mount(Box::new(help.clone()));

        shell.dispatch(&HostEvent::key(KeyCode::Char('?'), Modifiers::SHIFT));
        assert!(lock(&help).is_open());
        shell.dispatch(&HostEvent::key(KeyCode::Escape, Modifiers::NONE));
        assert!(!lock(&help).is_open());
    }

    #[test]
    fn test_online_status_notices() {
        let mut shell = Shell::default();
        shell.mount(Box::new(OnlineStatus::new()));

        assert_eq!(
            shell.dispatch(&HostEvent::Connectivity { online: false }),
            vec![OFFLINE_BANNER.to_string()]
        );
        assert!(shell
            .dispatch(&HostEvent::Connectivity { online: false })
            .is_empty());
        assert_eq!(
            shell.dispatch(&HostEvent::Connectivity { online: true }),
            vec![ONLINE_NOTICE.to_string()]
        );
    }

    #[test]
    fn test_section_events_pass_through_shared_logger() {
        let logger = shared(ActivityLogger::new(PersistenceAdapter::in_memory(), clock()));
        let mut shell = Shell::new("/");
        shell.mount(Box::new(logger.clone()));

        lock(&logger).log_section("Skill Matrix").unwrap();

        let kinds: Vec<_> = lock(&logger).all().into_iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![ActivityKind::Page, ActivityKind::Section]);
    }
}
