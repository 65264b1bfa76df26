use clap::Parser;

use crate::prelude::*;
use crate::record::RecordEdit;
use crate::target::TargetOutput;

/// Change the fields of a dataset. Options which aren't given keep
/// their current value.
#[derive(Debug, Parser)]
pub(crate) struct Edit {
    /// Run verbosely. Print additional progress information to the
    /// standard error stream. This option conflicts with the
    /// `--quiet` option.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Operate quietly; do not show progress. This option conflicts
    /// with the `--verbose` option.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// The new name of the project.
    #[arg(short, long)]
    name: Option<String>,

    /// The new location of the document collection.
    #[arg(short, long)]
    path: Option<String>,

    /// The new DTD revision.
    #[arg(short, long)]
    revision: Option<String>,

    /// The new target output (`paper`/`P` or `ietm`/`I`).
    #[arg(short, long)]
    target: Option<TargetOutput>,

    /// The position of the dataset as shown by `datareg list`.
    index: usize,
}

impl Edit {
    pub(crate) fn execute(self, ctx: &Context) -> DataregResult<()> {
        let edit = RecordEdit {
            project_name: self.name,
            network_path: self.path,
            dtd_revision: self.revision,
            target_output: self.target,
        };

        if edit.is_empty() {
            bail!("nothing to change");
        }

        let mut registry = ctx.open_registry(self.quiet)?;
        registry.edit(self.index, edit)?.into_result()?;

        if self.verbose {
            if let Some(record) = registry.get(self.index) {
                eprintln!(
                    "updated dataset #{} ('{}')",
                    self.index,
                    record.project_name()
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::record::DatasetRecord;
    use crate::store::Store;

    type TestResult = anyhow::Result<()>;

    fn context(dir: &Path) -> anyhow::Result<Context> {
        let store = dir.join(Context::STORE);
        Store::new(&store).save(&[DatasetRecord::new(
            "alpha",
            "//srv/alpha",
            "6.0.3",
            TargetOutput::Paper,
        )?])?;

        Ok(Context::new(dir.join(Context::CONFIG), Some(store)))
    }

    fn edit(index: usize) -> Edit {
        Edit {
            verbose: false,
            quiet: true,
            name: None,
            path: None,
            revision: None,
            target: None,
            index,
        }
    }

    #[test]
    fn edit_updates_given_fields() -> TestResult {
        let dir = tempfile::tempdir()?;
        let ctx = context(dir.path())?;

        Edit {
            revision: Some("7.0".into()),
            target: Some(TargetOutput::Ietm),
            ..edit(1)
        }
        .execute(&ctx)?;

        let registry = ctx.open_registry(true)?;
        let record = registry.get(1).unwrap();
        assert_eq!(record.project_name(), "alpha");
        assert_eq!(record.dtd_revision(), "7.0");
        assert_eq!(record.target_output(), &TargetOutput::Ietm);

        Ok(())
    }

    #[test]
    fn edit_without_options() -> TestResult {
        let dir = tempfile::tempdir()?;
        let ctx = context(dir.path())?;

        let result = edit(1).execute(&ctx);
        assert!(matches!(
            result,
            Err(DataregError::Other(ref msg)) if msg == "nothing to change"
        ));

        Ok(())
    }

    #[test]
    fn edit_out_of_range() -> TestResult {
        let dir = tempfile::tempdir()?;
        let ctx = context(dir.path())?;

        let result = Edit {
            name: Some("beta".into()),
            ..edit(2)
        }
        .execute(&ctx);

        assert!(matches!(
            result,
            Err(DataregError::OutOfRange { index: 2, len: 1 })
        ));

        Ok(())
    }
}
