//! `gastos show`: the dashboard as plain text

use clap::Args;

use crate::config::Settings;
use crate::display::format_dashboard;
use crate::error::GastosResult;

use super::SelectionArgs;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Name to greet
    #[arg(long)]
    pub name: Option<String>,
}

pub fn handle_show_command(args: &ShowArgs, settings: &Settings) -> GastosResult<()> {
    let store = args.selection.ledger.load(settings)?;
    let dashboard = args.selection.dashboard(&store, settings)?;
    let view = dashboard.refresh();

    print!(
        "{}",
        format_dashboard(&view, &dashboard.overall(), args.name.as_deref(), settings)
    );
    Ok(())
}
