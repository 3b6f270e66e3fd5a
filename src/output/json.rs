use serde::Serialize;

use crate::core::{SessionRecord, WorkspaceTotal, total_seconds};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkspaceShare<'a> {
    workspace: &'a str,
    seconds: u64,
    hours: f64,
}

fn workspace_shares(totals: &[WorkspaceTotal]) -> Vec<WorkspaceShare<'_>> {
    totals
        .iter()
        .map(|t| WorkspaceShare {
            workspace: &t.workspace,
            seconds: t.seconds,
            hours: t.hours(),
        })
        .collect()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyticsJson<'a> {
    records: &'a [SessionRecord],
    by_workspace: Vec<WorkspaceShare<'a>>,
    total_seconds: u64,
}

/// JSON document for `show --json`
pub(crate) fn output_analytics_json(
    records: &[SessionRecord],
    totals: &[WorkspaceTotal],
) -> String {
    let output = AnalyticsJson {
        records,
        by_workspace: workspace_shares(totals),
        total_seconds: total_seconds(records),
    };

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}
