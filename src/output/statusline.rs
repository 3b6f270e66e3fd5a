use crate::core::{SessionRecord, group_by_workspace, total_seconds};
use crate::output::format::{HourStyle, format_duration};

/// Single line suitable for statusline/tmux integration
/// Format: "Today: 1:23:45 | 3 sessions | top: codeclock"
pub(crate) fn statusline(today_records: &[SessionRecord]) -> String {
    let total = total_seconds(today_records);
    let mut parts = vec![
        format!("Today: {}", format_duration(total, HourStyle::Unbounded)),
        format!("{} sessions", today_records.len()),
    ];

    let totals = group_by_workspace(today_records);
    // first occurrence wins on ties
    let top = totals
        .iter()
        .fold(None::<&crate::core::WorkspaceTotal>, |best, t| match best {
            Some(b) if b.seconds >= t.seconds => Some(b),
            _ => Some(t),
        });
    if let Some(top) = top {
        parts.push(format!("top: {}", top.workspace));
    }

    parts.join(" | ")
}

pub(crate) fn print_statusline(today_records: &[SessionRecord]) {
    println!("{}", statusline(today_records));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(workspace: &str, duration: u64) -> SessionRecord {
        SessionRecord {
            workspace: workspace.to_string(),
            date: "2024-01-01".to_string(),
            duration,
            start_time: "09:00:00".to_string(),
            end_time: "10:00:00".to_string(),
            started_at: None,
            ended_at: None,
        }
    }

    #[test]
    fn statusline_sums_and_names_top_workspace() {
        let line = statusline(&[record("A", 600), record("B", 3000), record("A", 600)]);
        assert_eq!(line, "Today: 1:10:00 | 3 sessions | top: B");
    }

    #[test]
    fn statusline_without_sessions() {
        assert_eq!(statusline(&[]), "Today: 0:00:00 | 0 sessions");
    }

    #[test]
    fn statusline_tie_keeps_first() {
        let line = statusline(&[record("A", 60), record("B", 60)]);
        assert!(line.ends_with("top: A"));
    }
}
