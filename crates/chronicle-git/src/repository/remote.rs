use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Upstream remote of `branch`, from the `branch.<name>.remote` config.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NoUpstreamRemote`] if the branch has no upstream.
    pub fn remote_for_branch(&self, branch: &str) -> Result<String> {
        let refname = format!("refs/heads/{branch}");

        let buf = self
            .inner
            .branch_upstream_remote(&refname)
            .map_err(|_| GitError::NoUpstreamRemote {
                branch: branch.to_string(),
            })?;

        buf.as_str()
            .map(String::from)
            .ok_or_else(|| GitError::NoUpstreamRemote {
                branch: branch.to_string(),
            })
    }

    /// Default branch of `remote`, resolved from the symbolic
    /// `refs/remotes/<remote>/HEAD` reference.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NoDefaultBranch`] if the reference is missing or
    /// does not point at a branch of the remote.
    pub fn default_branch(&self, remote: &str) -> Result<String> {
        let head_ref = format!("refs/remotes/{remote}/HEAD");

        let reference =
            self.inner
                .find_reference(&head_ref)
                .map_err(|_| GitError::NoDefaultBranch {
                    remote: remote.to_string(),
                })?;

        let target = reference
            .symbolic_target()
            .ok_or_else(|| GitError::NoDefaultBranch {
                remote: remote.to_string(),
            })?;

        let prefix = format!("refs/remotes/{remote}/");
        target
            .strip_prefix(&prefix)
            .map(String::from)
            .ok_or_else(|| GitError::NoDefaultBranch {
                remote: remote.to_string(),
            })
    }
}
