use crate::app::App;
use hrdesk_store::{ActivityEvent, ActivityKind};
use std::path::Path;

fn format_event(event: &ActivityEvent) -> String {
    let kind = match event.kind {
        ActivityKind::Page => "page",
        ActivityKind::Section => "section",
    };
    match &event.path {
        Some(path) => format!(
            "  {} | {:<7} | {} ({})",
            event.time.format("%Y-%m-%d %H:%M:%S"),
            kind,
            event.name,
            path
        ),
        None => format!(
            "  {} | {:<7} | {}",
            event.time.format("%Y-%m-%d %H:%M:%S"),
            kind,
            event.name
        ),
    }
}

fn render_list(events: &[ActivityEvent]) -> String {
    if events.is_empty() {
        return "No activity logged".to_string();
    }

    let pages = events
        .iter()
        .filter(|e| e.kind == ActivityKind::Page)
        .count();
    let mut lines = vec![
        format!(
            "Activity ({} events: {} page, {} section)",
            events.len(),
            pages,
            events.len() - pages
        ),
        "==========================================".to_string(),
    ];
    lines.extend(events.iter().map(format_event));
    lines.join("\n")
}

pub fn run_list(data_dir: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let app = App::load(data_dir)?;
    let events = app.activity_logger().all();

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else {
        println!("{}", render_list(&events));
    }
    Ok(())
}

pub fn run_clear(data_dir: Option<&Path>) -> anyhow::Result<()> {
    let app = App::load(data_dir)?;
    app.activity_logger().clear()?;
    println!("Activity log cleared");
    Ok(())
}

pub fn run_section(data_dir: Option<&Path>, name: &str) -> anyhow::Result<()> {
    let app = App::load(data_dir)?;
    match app.activity_logger().log_section(name)? {
        Some(event) => println!("{}", format_event(&event)),
        None => println!("Section name is empty, nothing logged"),
    }
    Ok(())
}

pub fn run_visit(data_dir: Option<&Path>, path: &str, title: Option<&str>) -> anyhow::Result<()> {
    let app = App::load(data_dir)?;
    let event = app.activity_logger().record_page(path, title)?;
    println!("{}", format_event(&event));
    Ok(())
}
