//! Bug report widget

use crate::clock::Clock;
use hrdesk_store::{BugReport, PersistenceAdapter, StoreError, BUG_REPORTS_KEY};
use std::sync::Arc;

/// Confirmation shown after a report is stored
pub const FEEDBACK_SENT: &str = "Feedback sent successfully";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Stored; the form was cleared and closed
    Sent(BugReport),
    /// Blank message; nothing stored and the form stays as it was
    Rejected,
}

/// Floating "Report" trigger plus its capture form
pub struct BugReportWidget {
    adapter: PersistenceAdapter,
    clock: Arc<dyn Clock>,
    key: String,
    user_agent: String,
    page: String,
    open: bool,
    message: String,
}

impl BugReportWidget {
    pub fn new(
        adapter: PersistenceAdapter,
        clock: Arc<dyn Clock>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            adapter,
            clock,
            key: BUG_REPORTS_KEY.to_string(),
            user_agent: user_agent.into(),
            page: "/".to_string(),
            open: false,
            message: String::new(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Path reports are filed against
    pub fn page(&self) -> &str {
        &self.page
    }

    /// Follow the current route
    pub fn set_page(&mut self, path: impl Into<String>) {
        self.page = path.into();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close without submitting; the draft is kept
    pub fn cancel(&mut self) {
        self.open = false;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Persist the draft against the current page
    ///
    /// The message is stored as typed; only the emptiness check trims it. On
    /// a storage error the form is left untouched.
    pub fn submit(&mut self) -> Result<SubmitOutcome, StoreError> {
        if self.message.trim().is_empty() {
            return Ok(SubmitOutcome::Rejected);
        }

        let report = BugReport {
            message: self.message.clone(),
            page: self.page.clone(),
            user_agent: self.user_agent.clone(),
            time: self.clock.now(),
        };
        self.adapter.append(&self.key, &report)?;
        tracing::info!(page = %self.page, "bug report stored");

        self.message.clear();
        self.open = false;
        Ok(SubmitOutcome::Sent(report))
    }

    pub fn all_reports(&self) -> Vec<BugReport> {
        self.adapter.load(&self.key)
    }
}

impl std::fmt::Debug for BugReportWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BugReportWidget")
            .field("key", &self.key)
            .field("page", &self.page)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn widget() -> BugReportWidget {
        let clock = Arc::new(ManualClock::new("2025-06-02T08:00:00Z".parse().unwrap()));
        BugReportWidget::new(PersistenceAdapter::in_memory(), clock, "hrdesk-test/1.0")
    }

    #[test]
    fn test_submit_stores_context() {
        let mut widget = widget();
        widget.open();
        widget.set_page("/leave");
        widget.set_message("Leave balance shows NaN");

        let outcome = widget.submit().unwrap();

        let SubmitOutcome::Sent(report) = outcome else {
            panic!("expected report to be sent");
        };
        assert_eq!(report.message, "Leave balance shows NaN");
        assert_eq!(report.page, "/leave");
        assert_eq!(report.user_agent, "hrdesk-test/1.0");
        assert_eq!(widget.all_reports(), vec![report]);
        assert!(!widget.is_open());
        assert_eq!(widget.message(), "");
    }

    #[test]
    fn test_whitespace_message_rejected_silently() {
        let mut widget = widget();
        widget.open();
        widget.set_message("  ");

        assert_eq!(widget.submit().unwrap(), SubmitOutcome::Rejected);
        assert!(widget.all_reports().is_empty());
        assert!(widget.is_open());
        assert_eq!(widget.message(), "  ");
    }

    #[test]
    fn test_rejected_leaves_existing_reports() {
        let mut widget = widget();
        widget.set_message("first");
        widget.submit().unwrap();

        widget.set_message("\n\t ");
        widget.submit().unwrap();

        assert_eq!(widget.all_reports().len(), 1);
    }

    #[test]
    fn test_message_stored_untrimmed() {
        let mut widget = widget();
        widget.set_message("  padded  ");
        widget.submit().unwrap();

        assert_eq!(widget.all_reports()[0].message, "  padded  ");
    }

    #[test]
    fn test_cancel_keeps_draft() {
        let mut widget = widget();
        widget.open();
        widget.set_message("half written");
        widget.cancel();

        assert!(!widget.is_open());
        assert_eq!(widget.message(), "half written");
    }

    #[test]
    fn test_submit_recovers_from_foreign_records() {
        let mut widget = widget();
        widget
            .adapter
            .store()
            .set_item(BUG_REPORTS_KEY, r#"[{"message":42}]"#)
            .unwrap();

        widget.set_message("Export is slow");
        widget.submit().unwrap();

        let reports = widget.all_reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].message, "Export is slow");
    }
}
