//! Flat-file session store
//!
//! The whole record list lives in one JSON array. Saves rewrite the file
//! through a temporary sibling and a rename; there is no locking, so two
//! writers race and the last one wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::consts::DATA_FILE;
use crate::core::SessionRecord;
use crate::error::StorageError;

/// Result of reading the store when no error occurred
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LoadOutcome {
    /// No file yet
    Absent,
    Loaded(Vec<SessionRecord>),
}

impl LoadOutcome {
    pub(crate) fn into_records(self) -> Vec<SessionRecord> {
        match self {
            LoadOutcome::Absent => Vec::new(),
            LoadOutcome::Loaded(records) => records,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Storage {
    path: PathBuf,
}

impl Storage {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/sessionData.json`
    pub(crate) fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(DATA_FILE))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn try_load(&self) -> Result<LoadOutcome, StorageError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no session data yet");
                return Ok(LoadOutcome::Absent);
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let records: Vec<SessionRecord> =
            serde_json::from_slice(&data).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = records.len(), "loaded session data");
        Ok(LoadOutcome::Loaded(records))
    }

    pub(crate) fn try_save(&self, records: &[SessionRecord]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let payload = serde_json::to_vec_pretty(records).map_err(StorageError::Serialize)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, payload).map_err(|source| StorageError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = records.len(), "saved session data");
        Ok(())
    }

    /// Move an unreadable store to `sessionData.json.corrupt` so the next save
    /// starts a fresh file without destroying the old contents
    pub(crate) fn set_aside(&self) -> Result<PathBuf, StorageError> {
        let aside = self.path.with_extension("json.corrupt");
        fs::rename(&self.path, &aside).map_err(|source| StorageError::Write {
            path: aside.clone(),
            source,
        })?;
        warn!(
            from = %self.path.display(),
            to = %aside.display(),
            "moved corrupt session data aside"
        );
        Ok(aside)
    }

    /// Save every record, logging instead of failing; returns whether the write landed
    pub(crate) fn save(&self, records: &[SessionRecord]) -> bool {
        match self.try_save(records) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "session data not saved");
                false
            }
        }
    }
}
