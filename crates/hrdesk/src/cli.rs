use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hrdesk")]
#[command(version)]
#[command(about = "Session activity, idle watching and feedback for the HR dashboard")]
pub struct Cli {
    /// Data directory (defaults to $HRDESK_HOME or ~/.hrdesk)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or write the activity log
    Activity {
        #[command(subcommand)]
        action: Option<ActivityAction>,
    },

    /// Inspect or file bug reports
    Bugs {
        #[command(subcommand)]
        action: Option<BugAction>,
    },

    /// Filter the command palette
    Palette {
        /// Case-insensitive label filter
        query: Option<String>,
    },

    /// Show the idle watcher state after a period without input
    Idle {
        /// Milliseconds of inactivity
        #[arg(long)]
        elapsed_ms: u64,
    },

    /// Replay a JSONL script of host events through every component
    Replay {
        /// Path to the script
        file: PathBuf,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand)]
pub enum ActivityAction {
    /// List logged events
    List {
        /// Print the stored JSON array
        #[arg(long)]
        json: bool,
    },
    /// Remove the whole log
    Clear,
    /// Log use of a named section
    Section { name: String },
    /// Log a page visit
    Visit {
        path: String,
        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum BugAction {
    /// List stored reports
    List,
    /// File a report
    Submit {
        message: String,
        /// Page the report is about
        #[arg(long, default_value = "/")]
        page: String,
    },
}
