//! YAML Export functionality
//!
//! Human-readable variant of the summary export.

use crate::error::{GastosError, GastosResult};
use crate::export::json::SummaryExport;
use std::io::Write;

/// Write a summary as YAML, preceded by a short comment header
pub fn export_summary_yaml<W: Write>(summary: &SummaryExport, writer: &mut W) -> GastosResult<()> {
    let export_err = |e: std::io::Error| GastosError::Export(e.to_string());

    writeln!(writer, "# Gastos summary").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", summary.exported_at).map_err(export_err)?;
    writeln!(writer, "# Period: {}", summary.criteria.period).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, summary).map_err(|e| GastosError::Export(e.to_string()))?;

    Ok(())
}

/// Read a summary back from YAML
pub fn summary_from_yaml(yaml_str: &str) -> GastosResult<SummaryExport> {
    Ok(serde_yaml::from_str(yaml_str)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilterCriteria, MonthRange};
    use crate::services::AggregateResult;

    #[test]
    fn test_yaml_round_trip() {
        let criteria = FilterCriteria::new(["Food", "Rent"], MonthRange::new(2, 3).unwrap());
        let summary = SummaryExport::new(&criteria, &AggregateResult::default(), None);

        let mut output = Vec::new();
        export_summary_yaml(&summary, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Gastos summary"));
        assert!(text.contains("# Period: Fev-Mar"));

        let parsed = summary_from_yaml(&text).unwrap();
        assert_eq!(parsed.criteria, criteria);
        assert_eq!(parsed.total, "0.00");
        assert_eq!(parsed.mean, None);
    }
}
