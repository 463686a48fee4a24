//! `gastos summary`: aggregates of the selection as JSON or YAML

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::error::GastosResult;
use crate::export::{export_summary_json, export_summary_yaml, SummaryExport};
use crate::storage::write_atomic;

use super::SelectionArgs;

/// Summary format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SummaryFormat {
    /// JSON format
    #[default]
    Json,
    /// YAML format (human-readable)
    Yaml,
}

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: SummaryFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn handle_summary_command(args: &SummaryArgs, settings: &Settings) -> GastosResult<()> {
    let store = args.selection.ledger.load(settings)?;
    let dashboard = args.selection.dashboard(&store, settings)?;
    let view = dashboard.refresh();

    let source = store.source().map(|p| p.display().to_string());
    let summary = SummaryExport::new(dashboard.criteria(), &view.aggregate, source);

    match &args.output {
        Some(path) => {
            write_atomic(path, |writer| write_summary(&summary, args, writer))?;
            println!("Summary written to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_summary(&summary, args, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn write_summary<W: Write>(
    summary: &SummaryExport,
    args: &SummaryArgs,
    writer: &mut W,
) -> GastosResult<()> {
    match args.format {
        SummaryFormat::Json => export_summary_json(summary, writer, args.pretty),
        SummaryFormat::Yaml => export_summary_yaml(summary, writer),
    }
}
