use comfy_table::{Cell, Color, Table};

use crate::core::{SessionRecord, total_seconds};
use crate::output::format::{
    HourStyle, create_styled_table, format_duration, header_cell, right_cell, styled_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct SessionTableOptions<'a> {
    pub(crate) use_color: bool,
    /// Window label shown above the table, e.g. "This Week"
    pub(crate) period_label: &'a str,
}

/// Build the session table for records already sorted for display
pub(crate) fn build_session_table(records: &[SessionRecord], use_color: bool) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Workspace", use_color),
        header_cell("Date", use_color),
        header_cell("Duration", use_color),
        header_cell("Start Time", use_color),
        header_cell("End Time", use_color),
    ]);

    let duration_color = if use_color { Some(Color::Green) } else { None };

    for r in records {
        table.add_row(vec![
            Cell::new(&r.workspace),
            Cell::new(&r.date),
            right_cell(
                &format_duration(r.duration, HourStyle::Unbounded),
                duration_color,
                false,
            ),
            Cell::new(&r.start_time),
            Cell::new(&r.end_time),
        ]);
    }

    let cyan = if use_color { Some(Color::Cyan) } else { None };
    table.add_row(vec![
        styled_cell("TOTAL", cyan, true),
        Cell::new(""),
        right_cell(
            &format_duration(total_seconds(records), HourStyle::Unbounded),
            cyan,
            true,
        ),
        Cell::new(""),
        Cell::new(""),
    ]);

    table
}

pub(crate) fn print_session_table(
    records: &[SessionRecord],
    workspace_count: usize,
    options: SessionTableOptions<'_>,
) {
    let table = build_session_table(records, options.use_color);

    println!("\n  Coding Sessions ({})\n", options.period_label);
    println!("{table}");
    println!(
        "\n  {} sessions, {} workspaces\n",
        records.len(),
        workspace_count
    );
}
