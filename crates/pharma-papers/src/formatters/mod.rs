//! Output formatting for filtered papers.

pub mod csv;
pub mod table;

pub use csv::{render_csv, write_csv};
pub use table::{NO_RESULTS_MESSAGE, format_table};
