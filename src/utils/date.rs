use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;

/// Parse a stored record date ("2025-01-15"), also accepting the compact "20250115" form
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Some(d);
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}
