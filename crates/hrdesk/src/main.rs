mod app;
mod cli;
mod commands;

use clap::Parser;
use cli::{ActivityAction, BugAction, Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Commands::Activity { action } => {
            match action.unwrap_or(ActivityAction::List { json: false }) {
                ActivityAction::List { json } => commands::activity::run_list(data_dir, json),
                ActivityAction::Clear => commands::activity::run_clear(data_dir),
                ActivityAction::Section { name } => {
                    commands::activity::run_section(data_dir, &name)
                }
                ActivityAction::Visit { path, title } => {
                    commands::activity::run_visit(data_dir, &path, title.as_deref())
                }
            }
        }
        Commands::Bugs { action } => match action {
            Some(BugAction::List) | None => commands::bugs::run_list(data_dir),
            Some(BugAction::Submit { message, page }) => {
                commands::bugs::run_submit(data_dir, &message, &page)
            }
        },
        Commands::Palette { query } => commands::palette::run(data_dir, query.as_deref()),
        Commands::Idle { elapsed_ms } => commands::idle::run(data_dir, elapsed_ms),
        Commands::Replay { file } => commands::replay::run(data_dir, &file),
        Commands::Version => commands::version::run(),
    }
}
