//! Data models for papers, authors and export rows.

mod paper;
mod row;

pub use paper::{Author, FilteredPaper, Paper, UNKNOWN_DATE, UNKNOWN_TITLE};
pub use row::{LIST_SEPARATOR, PaperRow};
