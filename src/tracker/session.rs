//! Session tracker state machine
//!
//! Idle --start--> Tracking --stop--> Idle. Redundant transitions are no-ops.
//! The open session lives only in memory; a process that dies while Tracking
//! loses it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::core::SessionRecord;
use crate::error::StorageError;
use crate::storage::Storage;
use crate::tracker::indicator::{Render, StatusIndicator};
use crate::utils::{Timezone, workspace_or_unknown};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrackerState {
    Idle,
    Tracking { since: DateTime<Utc> },
}

#[derive(Debug)]
struct OpenSession {
    started_at: DateTime<Utc>,
    workspace: String,
}

/// What a stop produced
#[derive(Debug)]
pub(crate) struct StopOutcome {
    pub(crate) record: SessionRecord,
    /// Whether the full record list reached disk; failures are logged by the store
    pub(crate) saved: bool,
}

struct StatusHook {
    interval: Duration,
    render: Render,
}

pub(crate) struct SessionTracker {
    storage: Storage,
    timezone: Timezone,
    workspace: Option<String>,
    records: Vec<SessionRecord>,
    /// Where a corrupt store was moved before seeding from empty
    set_aside: Option<PathBuf>,
    open: Option<OpenSession>,
    status: Option<StatusHook>,
    indicator: Option<StatusIndicator>,
}

impl SessionTracker {
    /// Create an idle tracker, seeding the in-memory cache from `storage`.
    ///
    /// A store that fails to parse is moved aside first, so the next save
    /// cannot overwrite the history it holds. A store that cannot be read at
    /// all is an error.
    pub(crate) fn new(
        storage: Storage,
        timezone: Timezone,
        workspace: Option<String>,
    ) -> Result<Self, StorageError> {
        let (records, set_aside) = match storage.try_load() {
            Ok(outcome) => (outcome.into_records(), None),
            Err(StorageError::Parse { .. }) => (Vec::new(), Some(storage.set_aside()?)),
            Err(e) => return Err(e),
        };
        Ok(Self {
            storage,
            timezone,
            workspace,
            records,
            set_aside,
            open: None,
            status: None,
            indicator: None,
        })
    }

    /// Render elapsed time through `render` every `interval` while Tracking
    pub(crate) fn with_status_indicator(mut self, interval: Duration, render: Render) -> Self {
        self.status = Some(StatusHook { interval, render });
        self
    }

    pub(crate) fn state(&self) -> TrackerState {
        match &self.open {
            Some(open) => TrackerState::Tracking {
                since: open.started_at,
            },
            None => TrackerState::Idle,
        }
    }

    pub(crate) fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub(crate) fn set_aside_path(&self) -> Option<&Path> {
        self.set_aside.as_deref()
    }

    pub(crate) fn start(&mut self) -> bool {
        self.start_at(Utc::now())
    }

    /// Open a session at `now`; returns false if one is already open
    pub(crate) fn start_at(&mut self, now: DateTime<Utc>) -> bool {
        if self.open.is_some() {
            debug!("start ignored: already tracking");
            return false;
        }

        let workspace = workspace_or_unknown(self.workspace.as_deref());
        info!(workspace = %workspace, "session started");
        self.open = Some(OpenSession {
            started_at: now,
            workspace,
        });

        if let Some(hook) = &self.status {
            self.indicator = Some(StatusIndicator::spawn(
                now,
                hook.interval,
                hook.render.clone(),
            ));
        }
        true
    }

    pub(crate) fn stop(&mut self) -> Option<StopOutcome> {
        self.stop_at(Utc::now())
    }

    /// Close the open session at `now`, append its record and persist
    /// the full list. Returns None when idle.
    pub(crate) fn stop_at(&mut self, now: DateTime<Utc>) -> Option<StopOutcome> {
        let Some(open) = self.open.take() else {
            debug!("stop ignored: not tracking");
            return None;
        };

        if let Some(indicator) = self.indicator.take() {
            indicator.cancel();
        }

        let record = SessionRecord::from_span(
            open.workspace,
            self.timezone.to_fixed_offset(open.started_at),
            self.timezone.to_fixed_offset(now),
        );
        info!(
            workspace = %record.workspace,
            duration = record.duration,
            "session stopped"
        );

        self.records.push(record.clone());
        let saved = self.storage.save(&self.records);
        if !saved {
            warn!("session recorded in memory only");
        }

        Some(StopOutcome { record, saved })
    }
}
