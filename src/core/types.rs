//! Core data types for recorded sessions
//!
//! The record layout matches the persisted `sessionData.json` schema.

use chrono::{DateTime, FixedOffset, SubsecRound};
use serde::{Deserialize, Serialize};

use crate::consts::{DATE_FORMAT, TIME_FORMAT};

/// One completed, timed coding session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionRecord {
    /// Workspace active when the session started ("Unknown" if none)
    pub(crate) workspace: String,
    /// Local calendar date the session started (YYYY-MM-DD)
    pub(crate) date: String,
    /// Whole seconds between start and stop
    pub(crate) duration: u64,
    /// Local time of day at start (HH:MM:SS)
    pub(crate) start_time: String,
    /// Local time of day at stop (HH:MM:SS)
    pub(crate) end_time: String,
    /// Full start timestamp; absent on records written by older versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) started_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) ended_at: Option<DateTime<FixedOffset>>,
}

impl SessionRecord {
    /// Build a record from local start/stop instants.
    ///
    /// `date` and the time-of-day strings are derived from the instants, so a
    /// session crossing midnight keeps its start date while `ended_at` still
    /// pins the real end. Both instants are truncated to whole seconds first so
    /// `duration` always equals `endTime - startTime`.
    pub(crate) fn from_span(
        workspace: String,
        started_at: DateTime<FixedOffset>,
        ended_at: DateTime<FixedOffset>,
    ) -> Self {
        let started_at = started_at.trunc_subsecs(0);
        let ended_at = ended_at.trunc_subsecs(0);
        let duration = (ended_at - started_at).num_seconds().max(0) as u64;
        SessionRecord {
            workspace,
            date: started_at.format(DATE_FORMAT).to_string(),
            duration,
            start_time: started_at.format(TIME_FORMAT).to_string(),
            end_time: ended_at.format(TIME_FORMAT).to_string(),
            started_at: Some(started_at),
            ended_at: Some(ended_at),
        }
    }
}

/// Summed duration for one workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct WorkspaceTotal {
    pub(crate) workspace: String,
    pub(crate) seconds: u64,
}

impl WorkspaceTotal {
    pub(crate) fn hours(&self) -> f64 {
        self.seconds as f64 / crate::consts::SECONDS_PER_HOUR as f64
    }
}
