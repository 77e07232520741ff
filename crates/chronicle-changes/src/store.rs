use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use chronicle_core::ChangeFile;

use crate::Result;
use crate::error::ChangesError;

/// Project-relative directory holding the pending change files.
pub const CHANGES_DIR: &str = "changes";

const CHANGE_FILE_EXTENSION: &str = "json";
const FILE_NAME_DELIMITER: char = '_';
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

pub struct ChangeStore {
    changes_dir: PathBuf,
}

impl ChangeStore {
    #[must_use]
    pub fn new(project_root: &Path) -> Self {
        Self {
            changes_dir: project_root.join(CHANGES_DIR),
        }
    }

    /// Every pending change file across all branches, sorted by file name so
    /// consumption order is stable. An absent directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ChangesError::List`] if the directory cannot be read.
    pub fn list_all(&self) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.changes_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(ChangesError::List {
                    path: self.changes_dir.clone(),
                    source,
                });
            }
        };

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ChangesError::List {
                path: self.changes_dir.clone(),
                source,
            })?;
            let path = entry.path();

            if path
                .extension()
                .is_none_or(|ext| ext != CHANGE_FILE_EXTENSION)
            {
                continue;
            }

            paths.push(path);
        }

        paths.sort();
        Ok(paths)
    }

    /// Change files whose name carries the sanitized form of `branch`.
    ///
    /// # Errors
    ///
    /// Returns [`ChangesError::List`] if the directory cannot be read.
    pub fn list_for_branch(&self, branch: &str) -> Result<Vec<PathBuf>> {
        let fragment = sanitize_branch_name(branch);

        Ok(self
            .list_all()?
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.contains(&fragment))
            })
            .collect())
    }

    /// # Errors
    ///
    /// Returns [`ChangesError::InvalidChangeFile`] if the content does not
    /// match the change-file shape, including unrecognized severities.
    pub fn read(&self, path: &Path) -> Result<ChangeFile> {
        let content = fs::read_to_string(path).map_err(|source| ChangesError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ChangesError::InvalidChangeFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes `file` under a name derived from the sanitized branch name and
    /// the current timestamp, creating the directory on first use. A name
    /// collision within the same second overwrites silently.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be serialized or written.
    pub fn save(&self, file: &ChangeFile, branch: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.changes_dir).map_err(|source| ChangesError::CreateDir {
            path: self.changes_dir.clone(),
            source,
        })?;

        let file_name = format!(
            "{}{}{}.{}",
            sanitize_branch_name(branch),
            FILE_NAME_DELIMITER,
            Local::now().format(TIMESTAMP_FORMAT),
            CHANGE_FILE_EXTENSION
        );
        let path = self.changes_dir.join(file_name);

        let json = serde_json::to_string_pretty(file).map_err(ChangesError::Serialize)?;
        fs::write(&path, json).map_err(|source| ChangesError::Write {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "saved change file");
        Ok(path)
    }

    /// Best-effort deletion of exactly the given paths; paths that no longer
    /// exist are skipped without error.
    ///
    /// # Errors
    ///
    /// Returns [`ChangesError::Delete`] on any failure other than a missing
    /// file.
    pub fn delete_all(&self, paths: &[PathBuf]) -> Result<()> {
        for path in paths {
            match fs::remove_file(path) {
                Ok(()) => debug!(path = %path.display(), "deleted change file"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(source) => {
                    return Err(ChangesError::Delete {
                        path: path.clone(),
                        source,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Replaces every character outside `[A-Za-z0-9-]` with `-` so a branch name
/// can be embedded in a file name.
#[must_use]
pub fn sanitize_branch_name(branch: &str) -> String {
    branch
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
        .collect()
}

/// `true` when a repository-relative path points into the change directory.
/// Change files themselves must not count as source changes.
#[must_use]
pub fn is_change_file_path(path: &Path) -> bool {
    path.starts_with(CHANGES_DIR)
}
