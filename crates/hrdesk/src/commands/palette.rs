use crate::app::App;
use hrdesk_core::{CommandPalette, NO_MATCH};
use std::path::Path;

fn render_matches(palette: &CommandPalette) -> String {
    if palette.no_match() {
        return NO_MATCH.to_string();
    }
    palette
        .filtered()
        .iter()
        .enumerate()
        .map(|(i, item)| format!("  {}. {:<18} {}", i + 1, item.label, item.path))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run(data_dir: Option<&Path>, query: Option<&str>) -> anyhow::Result<()> {
    let app = App::load(data_dir)?;
    let mut palette = app.palette();
    palette.set_query(query.unwrap_or_default());
    println!("{}", render_matches(&palette));
    Ok(())
}
