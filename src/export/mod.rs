//! Export module for Gastos
//!
//! - CSV: the filtered records, in the ledger's own layout
//! - JSON: machine-readable aggregate summary
//! - YAML: human-readable aggregate summary

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{
    export_records_csv, export_records_to_file, EXPORT_FILE_NAME, EXPORT_MIME_TYPE,
};
pub use self::json::{export_summary_json, CategorySummary, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::{export_summary_yaml, summary_from_yaml};
