//! JSON Export functionality
//!
//! Exports the aggregate summary of a filtered view, with schema versioning.

use crate::error::{GastosError, GastosResult};
use crate::models::FilterCriteria;
use crate::services::AggregateResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current summary schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Aggregate summary of one selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Ledger file the records came from, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Selection the summary was computed for
    pub criteria: FilterCriteria,

    /// Number of records in the selection
    pub count: usize,

    /// Total, as a decimal string ("150.00")
    pub total: String,

    /// Mean, as a decimal string; absent when the selection is empty
    pub mean: Option<String>,

    /// Per-category totals, sorted by category
    pub categories: Vec<CategorySummary>,
}

/// One category line of the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total: String,
    pub percentage: f64,
}

impl SummaryExport {
    /// Build a summary from a selection and its aggregates
    pub fn new(
        criteria: &FilterCriteria,
        aggregate: &AggregateResult,
        source: Option<String>,
    ) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            source,
            criteria: criteria.clone(),
            count: aggregate.count,
            total: aggregate.total.to_decimal_string(),
            mean: aggregate.mean.map(|m| m.to_decimal_string()),
            categories: aggregate
                .shares()
                .into_iter()
                .map(|share| CategorySummary {
                    category: share.category,
                    total: share.total.to_decimal_string(),
                    percentage: share.percentage,
                })
                .collect(),
        }
    }
}

/// Write a summary as JSON
pub fn export_summary_json<W: Write>(
    summary: &SummaryExport,
    writer: &mut W,
    pretty: bool,
) -> GastosResult<()> {
    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, summary)
    } else {
        serde_json::to_writer(&mut *writer, summary)
    };
    result.map_err(|e| GastosError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| GastosError::Export(e.to_string()))?;
    Ok(())
}
