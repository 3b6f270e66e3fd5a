/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time-of-day format stored on records: "09:05:00"
pub(crate) const TIME_FORMAT: &str = "%H:%M:%S";

/// Fallback workspace name when no project folder is active
pub(crate) const UNKNOWN_WORKSPACE: &str = "Unknown";

/// File name of the session store inside the data directory
pub(crate) const DATA_FILE: &str = "sessionData.json";

/// Environment variable overriding the data directory
pub(crate) const DATA_DIR_ENV: &str = "CODECLOCK_DATA_DIR";

/// Environment variable holding a tracing filter directive
pub(crate) const LOG_ENV: &str = "CODECLOCK_LOG";

pub(crate) const SECONDS_PER_HOUR: u64 = 3600;
