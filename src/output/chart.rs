//! Per-workspace share of time, the terminal rendering of the pie chart

use comfy_table::{Cell, Color, Table};

use crate::core::WorkspaceTotal;
use crate::output::format::{create_styled_table, format_hours, header_cell, right_cell};

const BAR_WIDTH: usize = 24;

/// Slice colors, cycled in workspace order
const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::Red,
];

/// One slice of the breakdown
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Slice<'a> {
    pub(crate) workspace: &'a str,
    pub(crate) hours: f64,
    /// Share of the total, 0.0..=100.0
    pub(crate) percent: f64,
}

pub(crate) fn slices(totals: &[WorkspaceTotal]) -> Vec<Slice<'_>> {
    let sum: u64 = totals.iter().map(|t| t.seconds).sum();
    totals
        .iter()
        .map(|t| Slice {
            workspace: &t.workspace,
            hours: t.hours(),
            percent: if sum == 0 {
                0.0
            } else {
                t.seconds as f64 * 100.0 / sum as f64
            },
        })
        .collect()
}

fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}

pub(crate) fn build_breakdown_table(totals: &[WorkspaceTotal], use_color: bool) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Workspace", use_color),
        header_cell("Hours", use_color),
        header_cell("Share", use_color),
        header_cell("", use_color),
    ]);

    for (i, slice) in slices(totals).iter().enumerate() {
        let color = use_color.then(|| PALETTE[i % PALETTE.len()]);
        let mut bar_cell = Cell::new(bar(slice.percent));
        if let Some(c) = color {
            bar_cell = bar_cell.fg(c);
        }
        table.add_row(vec![
            Cell::new(slice.workspace),
            right_cell(&format_hours(slice.hours), None, false),
            right_cell(&format!("{:.1}%", slice.percent), color, false),
            bar_cell,
        ]);
    }

    table
}

pub(crate) fn print_breakdown(totals: &[WorkspaceTotal], use_color: bool) {
    if totals.is_empty() {
        return;
    }
    println!("  Time by Workspace\n");
    println!("{}", build_breakdown_table(totals, use_color));
    println!();
}
