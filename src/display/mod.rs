//! Display formatting for terminal output
//!
//! Plain-text rendering of the dashboard for the non-interactive commands.

pub mod records;
pub mod report;
pub mod summary;

pub use records::format_records_table;
pub use summary::{
    format_category_bars, format_dashboard, format_metrics, format_proportion, format_timeline,
};
