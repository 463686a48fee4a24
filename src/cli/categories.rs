//! `gastos categories`: distinct categories in the ledger

use clap::Args;

use crate::config::Settings;
use crate::error::GastosResult;

use super::LedgerArgs;

#[derive(Args, Debug, Clone)]
pub struct CategoriesArgs {
    #[command(flatten)]
    pub ledger: LedgerArgs,
}

pub fn handle_categories_command(args: &CategoriesArgs, settings: &Settings) -> GastosResult<()> {
    let store = args.ledger.load(settings)?;
    let categories = store.categories();

    if categories.is_empty() {
        println!("No categories found.");
        return Ok(());
    }

    for category in categories {
        println!("{}", category);
    }
    Ok(())
}
