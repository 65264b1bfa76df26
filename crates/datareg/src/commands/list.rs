use clap::Parser;

use crate::prelude::*;
use crate::view::datasets_table;

/// List all configured datasets.
#[derive(Debug, Default, Parser)]
pub(crate) struct List {
    /// Print the location of the dataset store before the list.
    #[arg(short, long)]
    verbose: bool,
}

impl List {
    pub(crate) fn execute(self, ctx: &Context) -> DataregResult<()> {
        let registry = ctx.open_registry(false)?;

        if self.verbose {
            eprintln!("store: {}", registry.store().path().display());
        }

        if registry.is_empty() {
            println!("No datasets configured.");
        } else {
            println!("{}", datasets_table(&registry));
        }

        Ok(())
    }
}
