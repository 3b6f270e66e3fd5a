//! Messages exchanged between the analytics view and its host
//!
//! Every message is a JSON object tagged by `command`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{SessionRecord, TimeFilter, WorkspaceTotal};

/// view → host
#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub(crate) enum ViewRequest {
    GetSessionData,
    #[serde(rename = "exportCSV", rename_all = "camelCase")]
    ExportCsv {
        filtered_data: Vec<SessionRecord>,
        /// Target chosen by the user; none means the dialog was dismissed
        #[serde(default)]
        path: Option<PathBuf>,
    },
    #[serde(rename_all = "camelCase")]
    Filter {
        #[serde(default)]
        time_filter: TimeFilter,
        #[serde(default)]
        project_filter: Option<String>,
    },
}

/// host → view
#[derive(Debug, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub(crate) enum ViewResponse {
    SessionData {
        data: Vec<SessionRecord>,
    },
    #[serde(rename_all = "camelCase")]
    FilteredData {
        data: Vec<SessionRecord>,
        by_workspace: Vec<WorkspaceTotal>,
    },
    Exported {
        path: PathBuf,
        rows: usize,
    },
    ExportSkipped,
    Error {
        message: String,
    },
}
