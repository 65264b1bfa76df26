use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{DataregResult, bail};

fn project_dirs() -> DataregResult<ProjectDirs> {
    match ProjectDirs::from("de.dnb", "DNB", "datareg") {
        Some(project_dirs) => Ok(project_dirs),
        None => bail!("unable to determine home directory!"),
    }
}

/// Creates `dir` (and all of its parents) if it doesn't exist yet.
pub(crate) fn ensure_dir<P: AsRef<Path>>(dir: P) -> DataregResult<PathBuf> {
    let dir = dir.as_ref();
    if !dir.exists() {
        create_dir_all(dir)?;
    }

    Ok(dir.to_path_buf())
}

/// Returns the config directory, creating it if necessary.
pub(crate) fn config_dir() -> DataregResult<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Returns the data directory, creating it if necessary.
pub(crate) fn data_dir() -> DataregResult<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}
