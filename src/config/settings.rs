//! User settings for Gastos
//!
//! Defaults for the ledger location, the export target and the
//! spending limit. Command-line flags take precedence over these.

use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::GastosPaths;
use crate::error::GastosError;
use crate::export::EXPORT_FILE_NAME;
use crate::models::money::DEFAULT_SYMBOL;
use crate::models::Money;
use crate::services::DEFAULT_SPENDING_LIMIT;
use crate::storage::{read_json, write_json_atomic};

/// Date format used when none is configured
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// User settings for Gastos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Ledger CSV read when no `--file` is given
    #[serde(default = "default_ledger_file")]
    pub ledger_file: PathBuf,

    /// Where `export` writes when no `--output` is given
    #[serde(default = "default_export_file")]
    pub export_file: PathBuf,

    /// Total above which the warning is shown, in centavos
    #[serde(default = "default_spending_limit")]
    pub spending_limit: Money,

    /// Currency symbol used in tables and messages
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for displayed records (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_ledger_file() -> PathBuf {
    PathBuf::from("gastos.csv")
}

fn default_export_file() -> PathBuf {
    PathBuf::from(EXPORT_FILE_NAME)
}

fn default_spending_limit() -> Money {
    DEFAULT_SPENDING_LIMIT
}

fn default_currency() -> String {
    DEFAULT_SYMBOL.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Whether chrono understands every specifier in `format`
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            ledger_file: default_ledger_file(),
            export_file: default_export_file(),
            spending_limit: default_spending_limit(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &GastosPaths) -> Result<Self, GastosError> {
        let settings: Settings = read_json(paths.settings_file()).map_err(|e| match e {
            GastosError::Json(msg) => {
                GastosError::Config(format!("Failed to parse settings file: {}", msg))
            }
            other => other,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would break rendering later
    pub fn validate(&self) -> Result<(), GastosError> {
        if !is_valid_date_format(&self.date_format) {
            return Err(GastosError::Config(format!(
                "Invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GastosPaths) -> Result<(), GastosError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
