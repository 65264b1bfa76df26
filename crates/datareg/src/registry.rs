use log::{debug, info};

use crate::prelude::*;
use crate::record::{DatasetRecord, RecordEdit, RecordId, RecordIdentity};
use crate::selection::ActiveSelection;
use crate::store::{Loaded, Store};

/// The outcome of writing the registry back to its store after a
/// mutation.
///
/// A failed save doesn't undo the mutation: the registry in memory and
/// the file on disk have diverged until the next successful save.
#[must_use]
#[derive(Debug)]
pub(crate) enum Persisted {
    Saved,
    Diverged(DataregError),
}

impl Persisted {
    #[inline]
    pub(crate) fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// Turns a diverged state into an error.
    pub(crate) fn into_result(self) -> DataregResult<()> {
        match self {
            Self::Saved => Ok(()),
            Self::Diverged(e) => Err(e),
        }
    }
}

#[derive(Debug)]
struct Entry {
    id: RecordId,
    record: DatasetRecord,
}

/// The ordered collection of configured datasets.
///
/// Records keep their insertion order, which is also the display
/// order. Indices are 1-based and only meaningful until the next
/// mutation.
#[derive(Debug)]
pub(crate) struct Registry {
    store: Store,
    entries: Vec<Entry>,
    active: ActiveSelection,
    next_id: u64,
}

impl Registry {
    /// Loads the registry from `store`.
    ///
    /// Problems with the store never prevent the registry from being
    /// created; they are returned alongside it.
    pub(crate) fn open(store: Store) -> (Self, Vec<DataregError>) {
        let Loaded { records, issues } = store.load();
        (Self::with_records(store, records), issues)
    }

    pub(crate) fn with_records(
        store: Store,
        records: Vec<DatasetRecord>,
    ) -> Self {
        let mut registry = Self {
            store,
            entries: Vec::with_capacity(records.len()),
            active: ActiveSelection::default(),
            next_id: 0,
        };

        for record in records {
            registry.push(record);
        }

        registry
    }

    fn push(&mut self, record: DatasetRecord) {
        self.next_id += 1;
        self.entries.push(Entry {
            id: RecordId::new(self.next_id),
            record,
        });
    }

    fn position(&self, index: usize) -> DataregResult<usize> {
        if index == 0 || index > self.entries.len() {
            return Err(DataregError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        Ok(index - 1)
    }

    fn persist(&self) -> Persisted {
        let records: Vec<DatasetRecord> =
            self.entries.iter().map(|e| e.record.clone()).collect();

        match self.store.save(&records) {
            Ok(()) => Persisted::Saved,
            Err(e) => {
                debug!(
                    "unable to save {}: {e}",
                    self.store.path().display()
                );
                Persisted::Diverged(e)
            }
        }
    }

    #[inline]
    pub(crate) fn store(&self) -> &Store {
        &self.store
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the record at the 1-based `index`.
    pub(crate) fn get(&self, index: usize) -> Option<&DatasetRecord> {
        let pos = self.position(index).ok()?;
        Some(&self.entries[pos].record)
    }

    /// Iterates over all records together with their 1-based index.
    pub(crate) fn iter(
        &self,
    ) -> impl Iterator<Item = (usize, &DatasetRecord)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (pos + 1, &entry.record))
    }

    /// Returns the active record and its current 1-based index.
    pub(crate) fn active(&self) -> Option<(usize, &DatasetRecord)> {
        let id = self.active.id()?;
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .map(|pos| (pos + 1, &self.entries[pos].record))
    }

    #[inline]
    pub(crate) fn active_identity(&self) -> Option<RecordIdentity> {
        self.active().map(|(_, record)| record.identity())
    }

    #[inline]
    pub(crate) fn selection(&self) -> ActiveSelection {
        self.active
    }

    /// Appends a record and saves the registry.
    ///
    /// Records with the same project name and network path as an
    /// existing record are accepted.
    pub(crate) fn add(&mut self, record: DatasetRecord) -> Persisted {
        info!("add dataset '{}'", record.project_name());
        self.push(record);
        self.persist()
    }

    /// Updates the record at the 1-based `index` and saves the
    /// registry. Missing or blank fields in `edit` are left unchanged.
    pub(crate) fn edit(
        &mut self,
        index: usize,
        edit: RecordEdit,
    ) -> DataregResult<Persisted> {
        let pos = self.position(index)?;
        let record = &mut self.entries[pos].record;

        record.apply(edit);
        info!("edit dataset #{index} ('{}')", record.project_name());

        Ok(self.persist())
    }

    /// Removes the record at the 1-based `index` and saves the
    /// registry. If the record was the active one, the selection is
    /// cleared before the registry is saved.
    pub(crate) fn remove(
        &mut self,
        index: usize,
    ) -> DataregResult<(DatasetRecord, Persisted)> {
        let pos = self.position(index)?;
        let Entry { id, record } = self.entries.remove(pos);

        if self.active.release(id) {
            info!("active dataset '{}' removed", record.project_name());
        }

        info!("remove dataset #{index} ('{}')", record.project_name());
        Ok((record, self.persist()))
    }

    /// Makes the record at the 1-based `index` the active dataset, or
    /// clears the selection if `index` is `None`.
    pub(crate) fn select(
        &mut self,
        index: Option<usize>,
    ) -> DataregResult<()> {
        match index {
            None => self.active.clear(),
            Some(index) => {
                let pos = self.position(index)?;
                self.active.set(self.entries[pos].id);
            }
        }

        Ok(())
    }
}
