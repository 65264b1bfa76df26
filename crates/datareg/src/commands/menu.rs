use clap::Parser;

use crate::prelude::*;
use crate::prompt::Terminal;

/// Manage datasets and the active dataset interactively.
#[derive(Debug, Default, Parser)]
pub(crate) struct Menu {
    /// Operate quietly; do not report problems with the dataset store
    /// on startup.
    #[arg(short, long)]
    quiet: bool,
}

impl Menu {
    pub(crate) fn execute(self, ctx: &Context) -> DataregResult<()> {
        use crate::menu::Menu as DatasetMenu;

        let mut registry = ctx.open_registry(self.quiet)?;
        let mut terminal = Terminal;

        if !self.quiet {
            eprintln!(
                "datareg: {} dataset(s) in {}",
                registry.len(),
                registry.store().path().display()
            );
        }

        DatasetMenu::new(&mut registry, &mut terminal).run()
    }
}
