use crate::app::App;
use hrdesk_core::{
    HostEvent, OnlineStatus, ShortcutHelp, SubmitOutcome, FEEDBACK_SENT, NO_MATCH,
};
use hrdesk_shell::{lock, shared, Component, Shell};
use hrdesk_store::read_jsonl_strict;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// One line of a session script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReplayStep {
    /// Deliver a host event to every listener
    Event { event: HostEvent },
    /// Let host time pass
    Advance { ms: u64 },
    /// Type into the command palette
    Query { text: String },
    /// Pick a filtered palette entry and follow it
    Select { index: usize },
    /// A dashboard section was viewed
    Section { name: String },
    /// File a bug report from the current page
    Report { message: String },
    StayLoggedIn,
}

/// Drive the mounted shell through `steps`, returning a transcript
pub fn replay(app: &App, steps: &[ReplayStep]) -> anyhow::Result<Vec<String>> {
    let logger = shared(app.activity_logger());
    let watcher = shared(app.idle_watcher());
    let palette = shared(app.palette());
    let widget = shared(app.bug_widget());

    let mut shell = Shell::new("/");
    let mut transcript = Vec::new();
    let components: [Box<dyn Component>; 6] = [
        Box::new(logger.clone()),
        Box::new(watcher.clone()),
        Box::new(palette.clone()),
        Box::new(widget.clone()),
        Box::new(shared(ShortcutHelp::new())),
        Box::new(shared(OnlineStatus::new())),
    ];
    for component in components {
        let (_, notices) = shell.mount(component);
        transcript.extend(notices);
    }

    for step in steps {
        match step {
            ReplayStep::Event { event } => {
                transcript.extend(shell.dispatch(event));
            }
            ReplayStep::Advance { ms } => {
                transcript.extend(shell.advance(Duration::from_millis(*ms)));
            }
            ReplayStep::Query { text } => {
                let mut palette = lock(&palette);
                palette.set_query(text.as_str());
                if palette.no_match() {
                    transcript.push(NO_MATCH.to_string());
                } else {
                    transcript.extend(
                        palette
                            .filtered()
                            .iter()
                            .map(|item| format!("{} -> {}", item.label, item.path)),
                    );
                }
            }
            ReplayStep::Select { index } => {
                let target = lock(&palette).select(*index);
                match target {
                    Some(path) => {
                        transcript.push(format!("navigate {path}"));
                        transcript.extend(shell.dispatch(&HostEvent::navigate(path)));
                    }
                    None => tracing::debug!(index, "palette selection ignored"),
                }
            }
            ReplayStep::Section { name } => {
                lock(&logger).log_section(name)?;
            }
            ReplayStep::Report { message } => {
                let mut widget = lock(&widget);
                widget.open();
                widget.set_message(message.as_str());
                if let SubmitOutcome::Sent(_) = widget.submit()? {
                    transcript.push(FEEDBACK_SENT.to_string());
                }
            }
            ReplayStep::StayLoggedIn => {
                lock(&watcher).stay_logged_in();
            }
        }
    }

    transcript.push(format!(
        "session {} at {}",
        lock(&watcher).state(),
        shell.current_path()
    ));
    Ok(transcript)
}

pub fn run(data_dir: Option<&Path>, file: &Path) -> anyhow::Result<()> {
    let app = App::load(data_dir)?;
    let steps: Vec<ReplayStep> = read_jsonl_strict(file)?;
    tracing::info!(steps = steps.len(), file = %file.display(), "replaying session");

    for line in replay(&app, &steps)? {
        println!("{line}");
    }
    Ok(())
}
