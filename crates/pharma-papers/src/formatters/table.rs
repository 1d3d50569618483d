//! Console table output.

use crate::models::PaperRow;

/// Printed instead of an empty table.
pub const NO_RESULTS_MESSAGE: &str = "No papers found with pharmaceutical/biotech company authors.";

const COLUMN_GAP: &str = "  ";

/// Format rows as a left-aligned, fixed-width table with a header line.
///
/// Returns [`NO_RESULTS_MESSAGE`] when there are no rows.
#[must_use]
pub fn format_table(rows: &[PaperRow]) -> String {
    if rows.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let cells: Vec<[String; 6]> =
        rows.iter().map(|row| row.cells().map(single_line)).collect();

    let mut widths = PaperRow::HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = format_line(&PaperRow::HEADERS, &widths);
    for row in &cells {
        output.push('\n');
        output.push_str(&format_line(row, &widths));
    }

    output
}

fn format_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}

/// Collapse embedded line breaks so each row stays on one line.
fn single_line(cell: &str) -> String {
    if cell.contains(['\n', '\r']) {
        cell.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        cell.to_string()
    }
}
