use clap::Parser;

use crate::prelude::*;
use crate::prompt::{Prompter, Terminal};

/// Remove a dataset.
#[derive(Debug, Parser)]
pub(crate) struct Remove {
    /// Run verbosely. Print additional progress information to the
    /// standard error stream. This option conflicts with the
    /// `--quiet` option.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Operate quietly; do not show progress. This option conflicts
    /// with the `--verbose` option.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Remove the dataset without asking for confirmation.
    #[arg(short, long)]
    force: bool,

    /// The position of the dataset as shown by `datareg list`.
    index: usize,
}

impl Remove {
    pub(crate) fn execute(self, ctx: &Context) -> DataregResult<()> {
        let mut registry = ctx.open_registry(self.quiet)?;

        let Some(record) = registry.get(self.index) else {
            return Err(DataregError::OutOfRange {
                index: self.index,
                len: registry.len(),
            });
        };

        if !self.force {
            let prompt = format!(
                "Remove dataset '{}' ({})?",
                record.project_name(),
                record.network_path()
            );

            if !Terminal.confirm(&prompt)? {
                bail!("aborted");
            }
        }

        let (record, persisted) = registry.remove(self.index)?;
        persisted.into_result()?;

        if self.verbose {
            eprintln!(
                "removed dataset #{} ('{}')",
                self.index,
                record.project_name()
            );
        }

        Ok(())
    }
}
