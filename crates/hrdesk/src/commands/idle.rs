use crate::app::App;
use hrdesk_core::{IdleConfig, IdleWatcher, SessionState, SessionTransition};
use std::path::Path;
use std::time::Duration;

/// Watcher state after `elapsed` without input, plus the transitions on the way
fn simulate(config: IdleConfig, elapsed: Duration) -> (SessionState, Vec<SessionTransition>) {
    let mut watcher = IdleWatcher::new(config);
    watcher.mount();
    let transitions = watcher.advance(elapsed);
    let state = watcher.state();
    watcher.unmount();
    (state, transitions)
}

pub fn run(data_dir: Option<&Path>, elapsed_ms: u64) -> anyhow::Result<()> {
    let app = App::load(data_dir)?;
    let idle = app.config.idle;
    let (state, transitions) = simulate(idle, Duration::from_millis(elapsed_ms));

    let output = serde_json::json!({
        "elapsedMs": elapsed_ms,
        "idleAfterMs": idle.idle_after_ms,
        "warningBeforeMs": idle.warning_before_ms,
        "warningAtMs": idle.warning_delay().as_millis() as u64,
        "state": state,
        "transitions": transitions.iter().map(|t| format!("{t:?}")).collect::<Vec<_>>(),
    });
    println!("{output}");
    Ok(())
}
