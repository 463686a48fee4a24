//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod categories;
pub mod export;
pub mod show;
pub mod summary;
pub mod tui;

pub use categories::{handle_categories_command, CategoriesArgs};
pub use export::{handle_export_command, ExportArgs, EXPORT_SUCCESS};
pub use show::{handle_show_command, ShowArgs};
pub use summary::{handle_summary_command, SummaryArgs, SummaryFormat};
pub use tui::{handle_tui_command, TuiArgs};

use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::config::Settings;
use crate::error::GastosResult;
use crate::models::{selector_range, FilterCriteria, Money, PeriodLabel};
use crate::services::Dashboard;
use crate::storage::RecordStore;

/// Which ledger to read
#[derive(Args, Debug, Clone, Default)]
pub struct LedgerArgs {
    /// Ledger CSV file [default: the configured ledger_file]
    #[arg(short, long, env = "GASTOS_FILE")]
    pub file: Option<PathBuf>,
}

impl LedgerArgs {
    /// The ledger path, from the flag or the settings
    pub fn path(&self, settings: &Settings) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| settings.ledger_file.clone())
    }

    /// Load the ledger; failure is fatal for every command that needs data
    pub fn load(&self, settings: &Settings) -> GastosResult<RecordStore> {
        Ok(RecordStore::load(self.path(settings))?)
    }
}

/// Category and period selection shared by the data commands
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    #[command(flatten)]
    pub ledger: LedgerArgs,

    /// Category to include (repeatable) [default: every category]
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Select no category at all
    #[arg(long, conflicts_with = "categories")]
    pub no_categories: bool,

    /// First month of the period (Jan, Fev, Mar, Abr or 1-4)
    #[arg(long, default_value = "Jan", value_name = "MONTH")]
    pub from: PeriodLabel,

    /// Last month of the period (Jan, Fev, Mar, Abr or 1-4)
    #[arg(long, default_value = "Abr", value_name = "MONTH")]
    pub to: PeriodLabel,

    /// Spending limit for the warning [default: the configured spending_limit]
    #[arg(long, value_name = "AMOUNT")]
    pub limit: Option<Money>,
}

impl SelectionArgs {
    /// Criteria for this selection over `store`
    pub fn criteria(&self, store: &RecordStore) -> GastosResult<FilterCriteria> {
        let period = selector_range(self.from, self.to)?;

        let categories: Vec<String> = if self.no_categories {
            Vec::new()
        } else if self.categories.is_empty() {
            store.categories()
        } else {
            let known = store.categories();
            let requested: Vec<String> = self
                .categories
                .iter()
                .map(|c| c.trim().to_string())
                .collect();
            for category in requested.iter().filter(|c| !known.contains(c)) {
                warn!(category = %category, "category not present in ledger");
            }
            requested
        };

        Ok(FilterCriteria::new(categories, period))
    }

    /// Start a dashboard session for this selection
    pub fn dashboard<'a>(
        &self,
        store: &'a RecordStore,
        settings: &Settings,
    ) -> GastosResult<Dashboard<'a>> {
        Ok(Dashboard::new(store)
            .with_criteria(self.criteria(store)?)
            .with_limit(self.limit.unwrap_or(settings.spending_limit))
            .with_currency_symbol(settings.currency_symbol.clone()))
    }
}
