//! CLI subcommand definitions

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::core::{ProjectFilter, RecordFilter, TimeFilter};

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Record a coding session until interrupted (Ctrl-C) or the time limit
    Track {
        /// Workspace name (defaults to the current directory's name)
        #[arg(short, long)]
        workspace: Option<String>,
        /// Stop automatically after this many seconds
        #[arg(long, value_name = "SECS")]
        stop_after: Option<u64>,
        /// Do not display the live elapsed time
        #[arg(short, long)]
        quiet: bool,
    },
    /// Show session analytics (default)
    Show {
        #[command(flatten)]
        filter: FilterArgs,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Export filtered sessions as CSV
    Export {
        /// Destination file; nothing is written when omitted
        path: Option<PathBuf>,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Output single line for statusline/tmux integration
    Statusline {
        /// Only count this workspace
        #[arg(short, long)]
        project: Option<String>,
    },
    /// Answer analytics view messages (JSON lines) on stdin/stdout
    View,
}

/// Time and project filters shared by `show` and `export`
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct FilterArgs {
    /// Time window
    #[arg(long, value_enum, default_value = "all")]
    pub(crate) period: TimeFilter,
    /// Only include this workspace ("all" for every workspace)
    #[arg(short, long)]
    pub(crate) project: Option<String>,
}

impl FilterArgs {
    pub(crate) fn to_filter(&self) -> RecordFilter {
        RecordFilter::new(self.period, ProjectFilter::from(self.project.clone()))
    }
}
