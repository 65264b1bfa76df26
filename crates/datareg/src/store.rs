use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;

use crate::prelude::*;
use crate::record::DatasetRecord;

/// The records read from a store, together with every problem that
/// was encountered on the way. None of the issues is fatal; a store
/// that can't be read at all yields an empty list of records.
#[derive(Debug, Default)]
pub(crate) struct Loaded {
    pub(crate) records: Vec<DatasetRecord>,
    pub(crate) issues: Vec<DataregError>,
}

impl Loaded {
    fn issue(error: DataregError) -> Self {
        Self {
            records: vec![],
            issues: vec![error],
        }
    }
}

/// The JSON file backing the dataset registry.
#[derive(Debug, Clone)]
pub(crate) struct Store {
    path: PathBuf,
}

impl Store {
    pub(crate) fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().into(),
        }
    }

    #[inline]
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all records from the store.
    ///
    /// A missing or blank file is an empty store. A file holding a
    /// single object instead of an array is read as a store with one
    /// record. Entries with missing or blank fields are skipped and
    /// reported as issues.
    pub(crate) fn load(&self) -> Loaded {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("store {} doesn't exist", self.path.display());
                return Loaded::default();
            }
            Err(e) => {
                debug!("unable to read {}: {e}", self.path.display());
                return Loaded::issue(e.into());
            }
        };

        if content.trim().is_empty() {
            debug!("store {} is empty", self.path.display());
            return Loaded::default();
        }

        let values = match serde_json::from_str::<Value>(&content) {
            Ok(Value::Array(values)) => values,
            Ok(value @ Value::Object(_)) => vec![value],
            Ok(_) => {
                debug!("{}: expected array or object", self.path.display());
                return Loaded::issue(DataregError::other(format!(
                    "{}: expected a JSON array or object",
                    self.path.display()
                )));
            }
            Err(e) => {
                debug!("unable to parse {}: {e}", self.path.display());
                return Loaded::issue(e.into());
            }
        };

        let mut loaded = Loaded::default();
        for (idx, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<DatasetRecord>(value) {
                Ok(record) => loaded.records.push(record),
                Err(e) => {
                    debug!("skip dataset #{}: {e}", idx + 1);
                    loaded.issues.push(DataregError::InvalidRecord(
                        format!("entry #{}: {e}", idx + 1),
                    ));
                }
            }
        }

        debug!(
            "loaded {} dataset(s) from {}",
            loaded.records.len(),
            self.path.display()
        );

        loaded
    }

    /// Writes all records to the store, replacing its content.
    pub(crate) fn save(
        &self,
        records: &[DatasetRecord],
    ) -> DataregResult<()> {
        let mut content = serde_json::to_string_pretty(records)?;
        content.push('\n');

        fs::write(&self.path, content)?;
        debug!(
            "saved {} dataset(s) to {}",
            records.len(),
            self.path.display()
        );

        Ok(())
    }
}
