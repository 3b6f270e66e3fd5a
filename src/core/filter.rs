//! Time-range and project filters for the analytics view

use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::types::SessionRecord;
use crate::utils::parse_date;

/// Time window a record's date must fall in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TimeFilter {
    /// Every recorded session (default)
    #[default]
    All,
    /// Sessions in the current calendar year
    Year,
    /// Sessions in the current calendar month
    Month,
    /// Sessions in the current Sunday-to-Saturday week
    Week,
    /// Sessions started today
    Today,
}

impl TimeFilter {
    pub(crate) fn label(self) -> &'static str {
        match self {
            TimeFilter::All => "All Time",
            TimeFilter::Year => "This Year",
            TimeFilter::Month => "This Month",
            TimeFilter::Week => "This Week",
            TimeFilter::Today => "Today",
        }
    }

    /// Whether `date` falls in this window relative to `today`
    pub(crate) fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            TimeFilter::All => true,
            TimeFilter::Year => date.year() == today.year(),
            TimeFilter::Month => date.year() == today.year() && date.month() == today.month(),
            TimeFilter::Week => {
                let (start, end) = week_bounds(today);
                date >= start && date <= end
            }
            TimeFilter::Today => date == today,
        }
    }
}

/// Sunday and Saturday of the week containing `today`
pub(crate) fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(today.weekday().num_days_from_sunday());
    let start = today - Duration::days(offset);
    (start, start + Duration::days(6))
}

/// Either every workspace or exactly one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum ProjectFilter {
    #[default]
    All,
    Only(String),
}

impl ProjectFilter {
    pub(crate) fn matches(&self, workspace: &str) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(name) => name == workspace,
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "all" {
            ProjectFilter::All
        } else {
            ProjectFilter::Only(s.to_string())
        })
    }
}

impl From<Option<String>> for ProjectFilter {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(name) => name.parse().unwrap_or_default(),
            None => ProjectFilter::All,
        }
    }
}

/// Combined analytics filter; both predicates must hold
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordFilter {
    pub(crate) time: TimeFilter,
    pub(crate) project: ProjectFilter,
}

impl RecordFilter {
    pub(crate) fn new(time: TimeFilter, project: ProjectFilter) -> Self {
        Self { time, project }
    }

    pub(crate) fn matches(&self, record: &SessionRecord, today: NaiveDate) -> bool {
        if !self.project.matches(&record.workspace) {
            return false;
        }
        if self.time == TimeFilter::All {
            return true;
        }
        // Unparseable dates only survive the "all" window
        parse_date(&record.date).is_some_and(|date| self.time.contains(date, today))
    }
}

/// Records matching `filter`, in input order
pub(crate) fn filter_records(
    records: &[SessionRecord],
    filter: &RecordFilter,
    today: NaiveDate,
) -> Vec<SessionRecord> {
    records
        .iter()
        .filter(|r| filter.matches(r, today))
        .cloned()
        .collect()
}
