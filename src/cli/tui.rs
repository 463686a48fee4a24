//! `gastos tui`: the interactive dashboard

use anyhow::Result;
use clap::Args;

use crate::config::Settings;
use crate::models::Money;
use crate::services::Dashboard;
use crate::tui::run_tui;

use super::LedgerArgs;

#[derive(Args, Debug, Clone)]
pub struct TuiArgs {
    #[command(flatten)]
    pub ledger: LedgerArgs,

    /// Name to greet
    #[arg(long)]
    pub name: Option<String>,

    /// Spending limit for the warning [default: the configured spending_limit]
    #[arg(long, value_name = "AMOUNT")]
    pub limit: Option<Money>,
}

pub fn handle_tui_command(args: &TuiArgs, settings: &Settings) -> Result<()> {
    let store = args.ledger.load(settings)?;
    let dashboard = Dashboard::new(&store)
        .with_limit(args.limit.unwrap_or(settings.spending_limit))
        .with_currency_symbol(settings.currency_symbol.clone());

    run_tui(
        dashboard,
        settings,
        settings.export_file.clone(),
        args.name.clone(),
    )
}
