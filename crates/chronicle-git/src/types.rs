use std::path::PathBuf;

/// Changes of a branch head relative to the remote default branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSummary {
    /// Repository-relative paths of every changed file.
    pub changed_paths: Vec<PathBuf>,
    /// One-line summary, e.g. "2 files changed, 2 insertions(+), 1 deletions(-)".
    pub short_stat: String,
}

impl DiffSummary {
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changed_paths.is_empty()
    }
}
