use tracing::debug;

use crate::{DiffSummary, Result};

use super::Repository;

impl Repository {
    /// Diffs `branch` against `<remote>/<default_branch>` from their merge
    /// base, mirroring `git diff <remote>/<default>...<branch>`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GitError::RefNotFound`] if either side cannot be
    /// resolved to a commit.
    pub fn diff_summary(
        &self,
        remote: &str,
        default_branch: &str,
        branch: &str,
    ) -> Result<DiffSummary> {
        let base_commit = self.resolve_commit(&format!("{remote}/{default_branch}"))?;
        let head_commit = self.resolve_commit(branch)?;

        let merge_base = self.inner.merge_base(base_commit.id(), head_commit.id())?;
        let merge_base_commit = self.inner.find_commit(merge_base)?;

        let diff = self.inner.diff_tree_to_tree(
            Some(&merge_base_commit.tree()?),
            Some(&head_commit.tree()?),
            None,
        )?;

        let mut changed_paths = Vec::new();
        for delta in diff.deltas() {
            if let Some(path) = delta.new_file().path().or_else(|| delta.old_file().path()) {
                changed_paths.push(path.to_path_buf());
            }
        }

        let stats = diff.stats()?;
        let short_stat = format!(
            "{} files changed, {} insertions(+), {} deletions(-)",
            stats.files_changed(),
            stats.insertions(),
            stats.deletions()
        );

        debug!(
            base = %format!("{remote}/{default_branch}"),
            head = branch,
            files = changed_paths.len(),
            "computed diff summary"
        );

        Ok(DiffSummary {
            changed_paths,
            short_stat,
        })
    }
}
