use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::Result;
use crate::entry::Changelog;
use crate::error::ChangelogError;

/// Structured changelog file name, project-relative.
pub const CHANGELOG_JSON: &str = "CHANGELOG.json";
/// Rendered document file name, regenerated on every apply-mode publish.
pub const CHANGELOG_MD: &str = "CHANGELOG.md";

/// Read/write boundary for the two changelog files. The store never merges
/// entries; callers prepend the new entry before persisting.
pub struct ChangelogStore {
    project_root: PathBuf,
}

impl ChangelogStore {
    #[must_use]
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }

    fn json_path(&self) -> PathBuf {
        self.project_root.join(CHANGELOG_JSON)
    }

    fn md_path(&self) -> PathBuf {
        self.project_root.join(CHANGELOG_MD)
    }

    /// `Ok(None)` when no structured changelog exists yet; callers bootstrap
    /// in that case.
    ///
    /// # Errors
    ///
    /// Returns [`ChangelogError::InvalidFormat`] if the file exists but does
    /// not match the changelog shape, or [`ChangelogError::Read`] on any
    /// other read failure.
    pub fn load(&self) -> Result<Option<Changelog>> {
        let path = self.json_path();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ChangelogError::Read { path, source }),
        };

        let changelog = serde_json::from_str(&content)
            .map_err(|source| ChangelogError::InvalidFormat { path, source })?;

        debug!("loaded structured changelog");
        Ok(Some(changelog))
    }

    /// Creates and persists an empty changelog for `project_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn bootstrap(&self, project_name: &str) -> Result<Changelog> {
        let changelog = Changelog::new(project_name);
        self.persist_structured(&changelog)?;
        Ok(changelog)
    }

    /// Overwrites the structured file with pretty-printed content.
    ///
    /// # Errors
    ///
    /// Returns an error if the changelog cannot be serialized or written.
    pub fn persist_structured(&self, changelog: &Changelog) -> Result<()> {
        let path = self.json_path();
        let json = serde_json::to_string_pretty(changelog).map_err(ChangelogError::Serialize)?;

        fs::write(&path, json).map_err(|source| ChangelogError::Write {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "persisted structured changelog");
        Ok(())
    }

    /// Overwrites the rendered document with raw text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn persist_rendered(&self, markdown: &str) -> Result<()> {
        let path = self.md_path();

        fs::write(&path, markdown).map_err(|source| ChangelogError::Write {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "persisted rendered changelog");
        Ok(())
    }
}
