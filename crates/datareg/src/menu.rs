use crate::prelude::*;
use crate::prompt::Prompter;
use crate::record::{DatasetRecord, RecordEdit};
use crate::registry::{Persisted, Registry};
use crate::view::{dataset_items, datasets_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    List,
    Add,
    Edit,
    Delete,
    Select,
    Exit,
}

impl Action {
    const ALL: [Action; 6] = [
        Self::List,
        Self::Add,
        Self::Edit,
        Self::Delete,
        Self::Select,
        Self::Exit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::List => "List datasets",
            Self::Add => "Add dataset",
            Self::Edit => "Edit dataset",
            Self::Delete => "Delete dataset",
            Self::Select => "Select active dataset",
            Self::Exit => "Exit",
        }
    }
}

/// Converts the answer of a cancelable menu into a 1-based index.
#[inline]
fn chosen(choice: usize) -> Option<usize> {
    (choice > 0).then_some(choice)
}

/// The interactive dataset menu.
pub(crate) struct Menu<'a, P: Prompter> {
    registry: &'a mut Registry,
    prompter: &'a mut P,
}

impl<'a, P: Prompter> Menu<'a, P> {
    pub(crate) fn new(
        registry: &'a mut Registry,
        prompter: &'a mut P,
    ) -> Self {
        Self { registry, prompter }
    }

    /// Runs the menu until the operator chooses to exit.
    pub(crate) fn run(&mut self) -> DataregResult<()> {
        let items: Vec<String> = Action::ALL
            .iter()
            .map(|action| action.label().to_string())
            .collect();

        loop {
            let status = match self.registry.active_identity() {
                Some(identity) => format!("\nActive dataset: {identity}"),
                None => "\nActive dataset: none".to_string(),
            };
            self.prompter.show(&status);

            let choice =
                self.prompter.choose("Select an option", &items, false)?;
            let Some(action) =
                choice.checked_sub(1).and_then(|idx| Action::ALL.get(idx))
            else {
                bail!("invalid menu option {choice}");
            };

            match action {
                Action::List => self.list(),
                Action::Add => self.add()?,
                Action::Edit => self.edit()?,
                Action::Delete => self.delete()?,
                Action::Select => self.select()?,
                Action::Exit => return Ok(()),
            }
        }
    }

    fn report(&mut self, persisted: Persisted) {
        if let Persisted::Diverged(e) = persisted {
            self.prompter.show(&format!(
                "warning: unable to save datasets to {} ({e}); \
                 the change is kept in memory only.",
                self.registry.store().path().display()
            ));
        }
    }

    /// Lets the operator pick a dataset. Returns `None` if the registry
    /// is empty or the operator cancels.
    fn pick(&mut self, prompt: &str) -> DataregResult<Option<usize>> {
        if self.registry.is_empty() {
            self.prompter.show("No datasets configured.");
            return Ok(None);
        }

        let items = dataset_items(self.registry);
        let choice = self.prompter.choose(prompt, &items, true)?;
        Ok(chosen(choice))
    }

    fn list(&mut self) {
        if self.registry.is_empty() {
            self.prompter.show("No datasets configured.");
            return;
        }

        let table = datasets_table(self.registry);
        self.prompter.show(&table.to_string());
    }

    fn add(&mut self) -> DataregResult<()> {
        let project_name = self.prompter.text("Project name", false)?;
        let network_path = self.prompter.text("Network path", false)?;
        let dtd_revision = self.prompter.text("DTD revision", false)?;

        let Some(target_output) = self.prompter.target_output(false)? else {
            self.prompter.show("Dataset not added: no target output.");
            return Ok(());
        };

        let record = match DatasetRecord::new(
            project_name,
            network_path,
            dtd_revision,
            target_output,
        ) {
            Ok(record) => record,
            Err(e) => {
                self.prompter.show(&format!("Dataset not added: {e}"));
                return Ok(());
            }
        };

        let name = record.project_name().to_string();
        let persisted = self.registry.add(record);
        if persisted.is_saved() {
            self.prompter.show(&format!("Dataset '{name}' added."));
        }

        self.report(persisted);
        Ok(())
    }

    fn edit(&mut self) -> DataregResult<()> {
        let Some(index) = self.pick("Dataset to edit")? else {
            return Ok(());
        };

        self.prompter.show("Leave a field blank to keep its value.");
        let mut blank_to_none =
            |prompt: &str| -> DataregResult<Option<String>> {
                let value = self.prompter.text(prompt, true)?;
                Ok(Some(value).filter(|v| !v.is_empty()))
            };

        let edit = RecordEdit {
            project_name: blank_to_none("New project name")?,
            network_path: blank_to_none("New network path")?,
            dtd_revision: blank_to_none("New DTD revision")?,
            target_output: self.prompter.target_output(true)?,
        };

        if edit.is_empty() {
            self.prompter.show("Nothing changed.");
            return Ok(());
        }

        let persisted = self.registry.edit(index, edit)?;
        if persisted.is_saved() {
            self.prompter.show(&format!("Dataset #{index} updated."));
        }

        self.report(persisted);
        Ok(())
    }

    fn delete(&mut self) -> DataregResult<()> {
        let Some(index) = self.pick("Dataset to delete")? else {
            return Ok(());
        };

        let Some(record) = self.registry.get(index) else {
            return Err(DataregError::OutOfRange {
                index,
                len: self.registry.len(),
            });
        };

        let name = record.project_name().to_string();

        let prompt = format!("Delete dataset '{name}'?");
        if !self.prompter.confirm(&prompt)? {
            self.prompter.show("Aborted.");
            return Ok(());
        }

        let (_, persisted) = self.registry.remove(index)?;
        if persisted.is_saved() {
            self.prompter.show(&format!("Dataset '{name}' deleted."));
        }

        self.report(persisted);
        Ok(())
    }

    fn select(&mut self) -> DataregResult<()> {
        let index = self.pick("Dataset to activate")?;
        if index.is_none() && self.registry.is_empty() {
            return Ok(());
        }

        self.registry.select(index)?;
        if !self.registry.selection().is_set() {
            self.prompter.show("Active dataset cleared.");
            return Ok(());
        }

        if let Some(identity) = self.registry.active_identity() {
            self.prompter.show(&format!("Active dataset: {identity}"));
        }

        Ok(())
    }
}
