use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gastos::cli::{
    handle_categories_command, handle_export_command, handle_show_command,
    handle_summary_command, handle_tui_command, CategoriesArgs, ExportArgs, ShowArgs, SummaryArgs,
    TuiArgs,
};
use gastos::config::{GastosPaths, Settings};
use gastos::GastosError;

#[derive(Parser)]
#[command(
    name = "gastos",
    author = "Kaylee Beyene",
    version,
    about = "Terminal expense tracker",
    long_about = "Gastos reads an expense ledger (CSV with data, descricao, valor and \
                  categoria columns), filters it by category and month, and shows \
                  totals, means and per-category charts. The filtered records can be \
                  exported back to CSV."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard: records, metrics, charts and warning
    Show(ShowArgs),

    /// Print aggregates of the selection as JSON or YAML
    Summary(SummaryArgs),

    /// Write the filtered records to a CSV file
    Export(ExportArgs),

    /// List the categories present in the ledger
    Categories(CategoriesArgs),

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui(TuiArgs),

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    gastos::logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<GastosError>() {
                Some(GastosError::Load(load)) => {
                    eprintln!("Error: could not load ledger: {}", load)
                }
                _ => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = GastosPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Show(args)) => handle_show_command(&args, &settings)?,
        Some(Commands::Summary(args)) => handle_summary_command(&args, &settings)?,
        Some(Commands::Export(args)) => handle_export_command(&args, &settings)?,
        Some(Commands::Categories(args)) => handle_categories_command(&args, &settings)?,
        Some(Commands::Tui(args)) => handle_tui_command(&args, &settings)?,
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Settings already exist at: {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Default settings written to: {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("Gastos Configuration");
            println!("====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Ledger file:     {}", settings.ledger_file.display());
            println!("  Export file:     {}", settings.export_file.display());
            println!(
                "  Spending limit:  {}",
                settings.spending_limit.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("Gastos - terminal expense tracker");
            println!();
            println!("Run 'gastos --help' for usage information.");
            println!("Run 'gastos show' to print the dashboard for gastos.csv.");
        }
    }

    Ok(())
}
