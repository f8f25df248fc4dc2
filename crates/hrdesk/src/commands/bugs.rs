use crate::app::App;
use hrdesk_core::{SubmitOutcome, FEEDBACK_SENT};
use hrdesk_store::BugReport;
use std::path::Path;

fn render_reports(reports: &[BugReport]) -> String {
    if reports.is_empty() {
        return "No bug reports".to_string();
    }

    let mut lines = vec![
        format!("Bug Reports ({})", reports.len()),
        "===============".to_string(),
    ];
    for report in reports {
        lines.push(format!(
            "  {} | {} | {}",
            report.time.format("%Y-%m-%d %H:%M"),
            report.page,
            report.message.trim()
        ));
    }
    lines.join("\n")
}

pub fn run_list(data_dir: Option<&Path>) -> anyhow::Result<()> {
    let app = App::load(data_dir)?;
    println!("{}", render_reports(&app.bug_widget().all_reports()));
    Ok(())
}

/// File a report; returns whether it was stored
fn submit(app: &App, message: &str, page: &str) -> anyhow::Result<bool> {
    let mut widget = app.bug_widget();
    widget.set_page(page);
    widget.open();
    widget.set_message(message);

    Ok(matches!(widget.submit()?, SubmitOutcome::Sent(_)))
}

pub fn run_submit(data_dir: Option<&Path>, message: &str, page: &str) -> anyhow::Result<()> {
    let app = App::load(data_dir)?;
    if submit(&app, message, page)? {
        println!("{}", FEEDBACK_SENT);
    } else {
        tracing::debug!("empty bug report ignored");
    }
    Ok(())
}
