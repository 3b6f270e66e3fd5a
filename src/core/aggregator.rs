//! Aggregation over filtered session records

use std::collections::HashMap;

use crate::cli::SortOrder;
use crate::core::types::{SessionRecord, WorkspaceTotal};

/// Sum durations per workspace, keeping first-occurrence order
pub(crate) fn group_by_workspace(records: &[SessionRecord]) -> Vec<WorkspaceTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<WorkspaceTotal> = Vec::new();

    for record in records {
        match index.get(record.workspace.as_str()) {
            Some(&i) => totals[i].seconds += record.duration,
            None => {
                index.insert(&record.workspace, totals.len());
                totals.push(WorkspaceTotal {
                    workspace: record.workspace.clone(),
                    seconds: record.duration,
                });
            }
        }
    }

    totals
}

/// Total recorded seconds
pub(crate) fn total_seconds(records: &[SessionRecord]) -> u64 {
    records.iter().map(|r| r.duration).sum()
}

/// Sort by date; the sort is stable so same-day records keep their input order
pub(crate) fn sort_by_date(records: &mut [SessionRecord], order: SortOrder) {
    match order {
        SortOrder::Asc => records.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Desc => records.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}
