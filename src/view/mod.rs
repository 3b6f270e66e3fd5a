//! Analytics view host: answers view messages over a line-oriented channel

mod protocol;

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::core::{ProjectFilter, RecordFilter, SessionRecord, filter_records, group_by_workspace};
use crate::error::AppError;
use crate::output::write_csv;
use crate::utils::Timezone;

use protocol::{ViewRequest, ViewResponse};

/// Host side of the view channel, backed by the tracker's record cache
pub(crate) struct ViewHost<'a> {
    records: &'a [SessionRecord],
    timezone: Timezone,
}

impl<'a> ViewHost<'a> {
    pub(crate) fn new(records: &'a [SessionRecord], timezone: Timezone) -> Self {
        Self { records, timezone }
    }

    /// Answer `request`, reading "today" from the clock at the time of the call
    pub(crate) fn handle(&self, request: ViewRequest) -> ViewResponse {
        self.handle_on(request, self.timezone.today())
    }

    fn handle_on(&self, request: ViewRequest, today: NaiveDate) -> ViewResponse {
        match request {
            ViewRequest::GetSessionData => ViewResponse::SessionData {
                data: self.records.to_vec(),
            },
            ViewRequest::Filter {
                time_filter,
                project_filter,
            } => {
                let filter = RecordFilter::new(time_filter, ProjectFilter::from(project_filter));
                let data = filter_records(self.records, &filter, today);
                let by_workspace = group_by_workspace(&data);
                ViewResponse::FilteredData { data, by_workspace }
            }
            ViewRequest::ExportCsv {
                filtered_data,
                path: None,
            } => {
                debug!(rows = filtered_data.len(), "export dismissed");
                ViewResponse::ExportSkipped
            }
            ViewRequest::ExportCsv {
                filtered_data,
                path: Some(path),
            } => match write_csv(&path, &filtered_data) {
                Ok(rows) => ViewResponse::Exported { path, rows },
                Err(e) => ViewResponse::Error {
                    message: e.to_string(),
                },
            },
        }
    }

    /// Decode one line and answer it; malformed input yields an error message
    pub(crate) fn handle_line(&self, line: &str) -> ViewResponse {
        match serde_json::from_str::<ViewRequest>(line) {
            Ok(request) => self.handle(request),
            Err(e) => {
                let err = AppError::Protocol(e);
                warn!(error = %err, "rejected view message");
                ViewResponse::Error {
                    message: err.to_string(),
                }
            }
        }
    }

    /// Answer newline-delimited requests until `input` is exhausted
    pub(crate) fn serve<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<(), AppError> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let response = self.handle_line(&line);
            serde_json::to_writer(&mut output, &response)?;
            output.write_all(b"\n")?;
            output.flush()?;
        }
        Ok(())
    }
}
