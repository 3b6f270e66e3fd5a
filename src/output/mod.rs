mod chart;
mod csv;
mod format;
mod json;
mod statusline;
mod table;

pub(crate) use chart::print_breakdown;
pub(crate) use csv::write_csv;
pub(crate) use format::{HourStyle, format_duration};
pub(crate) use json::output_analytics_json;
pub(crate) use statusline::print_statusline;
pub(crate) use table::{SessionTableOptions, print_session_table};
