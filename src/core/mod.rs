//! Core module - session records, filters and aggregation

mod aggregator;
mod filter;
mod types;

pub(crate) use aggregator::{group_by_workspace, sort_by_date, total_seconds};
pub(crate) use filter::{ProjectFilter, RecordFilter, TimeFilter, filter_records};
pub(crate) use types::{SessionRecord, WorkspaceTotal};
