use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use tracing::debug;

use crate::cli::{Cli, Commands, FilterArgs};
use crate::core::{
    ProjectFilter, RecordFilter, SessionRecord, TimeFilter, filter_records, group_by_workspace,
    sort_by_date,
};
use crate::error::AppError;
use crate::output::{
    HourStyle, SessionTableOptions, format_duration, output_analytics_json, print_breakdown,
    print_session_table, print_statusline, write_csv,
};
use crate::storage::Storage;
use crate::tracker::{Render, SessionTracker};
use crate::utils::{Timezone, detect_workspace};
use crate::view::ViewHost;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) storage: Storage,
    pub(crate) timezone: Timezone,
}

/// Dispatch the parsed command; no subcommand means `show`
pub(crate) fn run(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match &ctx.cli.command {
        Some(Commands::Track {
            workspace,
            stop_after,
            quiet,
        }) => handle_track(ctx, workspace.as_deref(), *stop_after, *quiet),
        Some(Commands::Show { filter, json }) => {
            handle_show(ctx, filter, *json);
            Ok(())
        }
        Some(Commands::Export { path, filter }) => handle_export(ctx, path.as_deref(), filter),
        Some(Commands::Statusline { project }) => {
            handle_statusline(ctx, project.clone());
            Ok(())
        }
        Some(Commands::View) => handle_view(ctx),
        None => {
            handle_show(ctx, &FilterArgs::default(), false);
            Ok(())
        }
    }
}

/// Load all records for a report. An unreadable store degrades to an empty
/// list with a warning on stderr.
fn load_records(storage: &Storage) -> Vec<SessionRecord> {
    match storage.try_load() {
        Ok(outcome) => outcome.into_records(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Vec::new()
        }
    }
}

/// Open a tracker over the store, reporting a corrupt file that was moved aside
fn open_tracker(
    ctx: &CommandContext<'_>,
    workspace: Option<String>,
) -> Result<SessionTracker, AppError> {
    let tracker = SessionTracker::new(ctx.storage.clone(), ctx.timezone, workspace)?;
    if let Some(aside) = tracker.set_aside_path() {
        eprintln!(
            "Warning: session data at {} was corrupt; moved to {}",
            ctx.storage.path().display(),
            aside.display()
        );
    }
    Ok(tracker)
}

fn filtered(ctx: &CommandContext<'_>, filter: &RecordFilter) -> Vec<SessionRecord> {
    let records = load_records(&ctx.storage);
    filter_records(&records, filter, ctx.timezone.today())
}

fn handle_track(
    ctx: &CommandContext<'_>,
    workspace: Option<&str>,
    stop_after: Option<u64>,
    quiet: bool,
) -> Result<(), AppError> {
    let workspace = detect_workspace(workspace);
    let mut tracker = open_tracker(ctx, workspace.clone())?;
    if !quiet {
        let render: Render = Arc::new(|clock: &str| {
            let mut stderr = io::stderr().lock();
            let _ = write!(stderr, "\r  {clock}");
            let _ = stderr.flush();
        });
        tracker = tracker.with_status_indicator(TICK_INTERVAL, render);
    }

    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.send(());
    })
    .map_err(|e| AppError::Signal(e.to_string()))?;

    if !quiet {
        eprintln!(
            "Tracking {} (Ctrl-C to stop)",
            workspace.as_deref().unwrap_or(crate::consts::UNKNOWN_WORKSPACE)
        );
    }
    tracker.start();

    match stop_after {
        Some(secs) => {
            let _ = shutdown_rx.recv_timeout(Duration::from_secs(secs));
        }
        None => {
            let _ = shutdown_rx.recv();
        }
    }
    debug!(state = ?tracker.state(), "deactivating");

    if let Some(outcome) = tracker.stop() {
        if !quiet {
            eprintln!();
        }
        let record = &outcome.record;
        println!(
            "Recorded {} in {} on {} ({} - {})",
            format_duration(record.duration, HourStyle::Unbounded),
            record.workspace,
            record.date,
            record.start_time,
            record.end_time
        );
        if !outcome.saved {
            eprintln!(
                "Warning: session not saved to {}",
                ctx.storage.path().display()
            );
        }
    }
    Ok(())
}

fn handle_show(ctx: &CommandContext<'_>, filter: &FilterArgs, json: bool) {
    let mut records = filtered(ctx, &filter.to_filter());
    sort_by_date(&mut records, ctx.cli.sort_order());
    let totals = group_by_workspace(&records);

    if json {
        println!("{}", output_analytics_json(&records, &totals));
        return;
    }
    if records.is_empty() {
        println!("No session data found.");
        return;
    }

    let use_color = ctx.cli.use_color();
    print_session_table(
        &records,
        totals.len(),
        SessionTableOptions {
            use_color,
            period_label: filter.period.label(),
        },
    );
    print_breakdown(&totals, use_color);
}

fn handle_export(
    ctx: &CommandContext<'_>,
    path: Option<&Path>,
    filter: &FilterArgs,
) -> Result<(), AppError> {
    let Some(path) = path else {
        println!("No export path chosen; nothing written.");
        return Ok(());
    };
    let records = filtered(ctx, &filter.to_filter());
    let rows = write_csv(path, &records)?;
    println!("Exported {rows} sessions to {}", path.display());
    Ok(())
}

fn handle_statusline(ctx: &CommandContext<'_>, project: Option<String>) {
    let filter = RecordFilter::new(TimeFilter::Today, ProjectFilter::from(project));
    let records = filter_records(&load_records(&ctx.storage), &filter, ctx.timezone.today());
    print_statusline(&records);
}

fn handle_view(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let tracker = open_tracker(ctx, None)?;
    let host = ViewHost::new(tracker.records(), ctx.timezone);
    host.serve(io::stdin().lock(), io::stdout().lock())
}
