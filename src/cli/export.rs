//! `gastos export`: write the filtered records as CSV

use clap::Args;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::GastosResult;
use crate::export::export_records_to_file;

use super::SelectionArgs;

/// Printed once the file is written
pub const EXPORT_SUCCESS: &str = "Arquivo CSV gerado com sucesso!";

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output file path [default: the configured export_file]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn handle_export_command(args: &ExportArgs, settings: &Settings) -> GastosResult<()> {
    let store = args.selection.ledger.load(settings)?;
    let dashboard = args.selection.dashboard(&store, settings)?;
    let view = dashboard.refresh();

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| settings.export_file.clone());
    let count = export_records_to_file(view.records.iter().copied(), &output)?;

    println!("{}", EXPORT_SUCCESS);
    println!("{} record(s) exported to: {}", count, output.display());
    Ok(())
}
