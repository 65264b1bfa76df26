use clap::Parser;

use crate::prelude::*;
use crate::record::DatasetRecord;
use crate::target::TargetOutput;

/// Add a new dataset.
#[derive(Debug, Parser)]
pub(crate) struct Add {
    /// Run verbosely. Print additional progress information to the
    /// standard error stream. This option conflicts with the
    /// `--quiet` option.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Operate quietly; do not show progress. This option conflicts
    /// with the `--verbose` option.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// The name of the project.
    #[arg(short, long)]
    name: String,

    /// The location of the document collection.
    #[arg(short, long)]
    path: String,

    /// The DTD revision of the documents, e.g. "6.0.3".
    #[arg(short, long)]
    revision: String,

    /// The target output: `paper` (or `P`) for Paper (PDF), `ietm`
    /// (or `I`) for IETM (IADS).
    #[arg(short, long)]
    target: TargetOutput,
}

impl Add {
    pub(crate) fn execute(self, ctx: &Context) -> DataregResult<()> {
        let mut registry = ctx.open_registry(self.quiet)?;
        let record = DatasetRecord::new(
            self.name,
            self.path,
            self.revision,
            self.target,
        )?;

        let name = record.project_name().to_string();
        registry.add(record).into_result()?;

        if self.verbose {
            eprintln!("added dataset #{} ('{name}')", registry.len());
        }

        Ok(())
    }
}
