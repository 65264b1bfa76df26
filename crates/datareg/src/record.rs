use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::target::TargetOutput;

/// An opaque handle the registry assigns to each record it holds.
///
/// Ids are only valid for the lifetime of the process and are never
/// written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct RecordId(u64);

impl RecordId {
    #[inline]
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

/// The (project name, network path) pair a record is known by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RecordIdentity {
    pub(crate) project_name: String,
    pub(crate) network_path: String,
}

impl Display for RecordIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.project_name, self.network_path)
    }
}

/// A configured dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub(crate) struct DatasetRecord {
    /// The name of the project.
    #[serde(rename = "ProjectName")]
    project_name: String,

    /// The location of the document collection. The value is opaque
    /// and isn't checked against the filesystem.
    #[serde(rename = "NetworkPath")]
    network_path: String,

    /// The DTD revision of the documents, e.g. "6.0.3".
    #[serde(rename = "DTDRevision")]
    dtd_revision: String,

    #[serde(rename = "TargetOutput")]
    target_output: TargetOutput,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "ProjectName")]
    project_name: String,
    #[serde(rename = "NetworkPath")]
    network_path: String,
    #[serde(rename = "DTDRevision")]
    dtd_revision: String,
    #[serde(rename = "TargetOutput")]
    target_output: TargetOutput,
}

impl TryFrom<RawRecord> for DatasetRecord {
    type Error = DataregError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        Self::new(
            raw.project_name,
            raw.network_path,
            raw.dtd_revision,
            raw.target_output,
        )
    }
}

#[inline]
fn require(field: &str, value: String) -> DataregResult<String> {
    if value.trim().is_empty() {
        return Err(DataregError::InvalidRecord(format!(
            "{field} must not be empty"
        )));
    }

    Ok(value)
}

impl DatasetRecord {
    /// Creates a new record.
    ///
    /// This function fails, if any of the fields is empty or consists
    /// of whitespace only.
    pub(crate) fn new<S1, S2, S3>(
        project_name: S1,
        network_path: S2,
        dtd_revision: S3,
        target_output: TargetOutput,
    ) -> DataregResult<Self>
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        require("TargetOutput", target_output.code().to_string())?;

        Ok(Self {
            project_name: require("ProjectName", project_name.into())?,
            network_path: require("NetworkPath", network_path.into())?,
            dtd_revision: require("DTDRevision", dtd_revision.into())?,
            target_output,
        })
    }

    #[inline]
    pub(crate) fn project_name(&self) -> &str {
        &self.project_name
    }

    #[inline]
    pub(crate) fn network_path(&self) -> &str {
        &self.network_path
    }

    #[inline]
    pub(crate) fn dtd_revision(&self) -> &str {
        &self.dtd_revision
    }

    #[inline]
    pub(crate) fn target_output(&self) -> &TargetOutput {
        &self.target_output
    }

    pub(crate) fn identity(&self) -> RecordIdentity {
        RecordIdentity {
            project_name: self.project_name.clone(),
            network_path: self.network_path.clone(),
        }
    }

    /// Applies an edit. Fields that are missing or blank in `edit`
    /// keep their current value.
    pub(crate) fn apply(&mut self, edit: RecordEdit) {
        let RecordEdit {
            project_name,
            network_path,
            dtd_revision,
            target_output,
        } = edit;

        replace(&mut self.project_name, project_name);
        replace(&mut self.network_path, network_path);
        replace(&mut self.dtd_revision, dtd_revision);

        if let Some(target) = target_output {
            if !target.code().trim().is_empty() {
                self.target_output = target;
            }
        }
    }
}

#[inline]
fn replace(field: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        *field = value;
    }
}

/// A partial update of a [DatasetRecord]; `None` means "keep the
/// current value".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct RecordEdit {
    pub(crate) project_name: Option<String>,
    pub(crate) network_path: Option<String>,
    pub(crate) dtd_revision: Option<String>,
    pub(crate) target_output: Option<TargetOutput>,
}

impl RecordEdit {
    pub(crate) fn is_empty(&self) -> bool {
        self.project_name.is_none()
            && self.network_path.is_none()
            && self.dtd_revision.is_none()
            && self.target_output.is_none()
    }
}
