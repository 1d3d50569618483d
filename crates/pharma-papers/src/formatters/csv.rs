//! CSV export.
//!
//! Output is UTF-8 with a byte-order mark so spreadsheet applications pick
//! the right encoding when the file is opened directly.

use std::path::Path;

use crate::models::PaperRow;

/// UTF-8 byte-order mark.
pub const BOM: char = '\u{FEFF}';

/// Render rows as CSV, header first, with a leading BOM.
#[must_use]
pub fn render_csv(rows: &[PaperRow]) -> String {
    let mut output = String::new();
    output.push(BOM);

    output.push_str(&csv_line(&PaperRow::HEADERS));
    for row in rows {
        output.push_str(&csv_line(&row.cells()));
    }

    output
}

/// Write rows to `path`, replacing any existing file.
pub fn write_csv(path: impl AsRef<Path>, rows: &[PaperRow]) -> std::io::Result<()> {
    let path = path.as_ref();
    std::fs::write(path, render_csv(rows))?;
    tracing::info!(path = %path.display(), count = rows.len(), "Saved papers to CSV");
    Ok(())
}

fn csv_line(cells: &[&str]) -> String {
    let mut line = cells.iter().map(|c| csv_escape(c)).collect::<Vec<_>>().join(",");
    line.push('\n');
    line
}

/// Escape a string for CSV output.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
