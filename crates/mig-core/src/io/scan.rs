use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{MigError, Result};
use crate::frame::ExperimentDir;

/// Outcome of [`ensure_dir`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirStatus {
    Existed,
    Created,
    Failed,
}

/// Check that the input root exists and is a directory.
pub fn validate_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(MigError::RootNotFound {
            path: root.to_path_buf(),
        })
    }
}

fn read_dir_error(path: &Path, source: std::io::Error) -> MigError {
    MigError::ReadDir {
        path: path.to_path_buf(),
        source,
    }
}

/// Lazily list the experiment folders directly under `root`.
///
/// Entries come back in filesystem enumeration order. Plain files at this
/// level are skipped. Callers check the root with [`validate_root`] first.
pub fn experiment_dirs(root: &Path) -> Result<impl Iterator<Item = Result<ExperimentDir>>> {
    let entries = fs::read_dir(root).map_err(|e| read_dir_error(root, e))?;
    let root = root.to_path_buf();

    Ok(entries.filter_map(move |entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => return Some(Err(read_dir_error(&root, e))),
        };
        let path = entry.path();
        if !path.is_dir() {
            debug!(path = %path.display(), "Skipping non-directory entry in input root");
            return None;
        }
        Some(Ok(ExperimentDir {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
        }))
    }))
}

/// Lazily list the regular files directly inside an experiment folder.
///
/// Nested folders are ignored; the scan never goes deeper than one level.
pub fn image_files(dir: &Path) -> Result<impl Iterator<Item = Result<PathBuf>>> {
    let entries = fs::read_dir(dir).map_err(|e| read_dir_error(dir, e))?;
    let dir = dir.to_path_buf();

    Ok(entries.filter_map(move |entry| match entry {
        Ok(entry) => {
            let path = entry.path();
            path.is_file().then_some(Ok(path))
        }
        Err(e) => Some(Err(read_dir_error(&dir, e))),
    }))
}

/// Create `path` (and any missing parents) unless it already exists.
///
/// Never fails: creation errors are logged and reported as
/// [`DirStatus::Failed`]. A later report write into the folder will surface
/// the problem.
pub fn ensure_dir(path: &Path) -> DirStatus {
    if path.exists() {
        info!(path = %path.display(), "Folder already exists");
        return DirStatus::Existed;
    }

    match fs::create_dir_all(path) {
        Ok(()) => {
            info!(path = %path.display(), "Folder created");
            DirStatus::Created
        }
        Err(source) => {
            let err = MigError::DirectoryCreate {
                path: path.to_path_buf(),
                source,
            };
            warn!("{err}");
            DirStatus::Failed
        }
    }
}
