use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("HEAD is detached, not on a branch")]
    DetachedHead,

    #[error("failed to resolve reference '{refspec}'")]
    RefNotFound { refspec: String },

    #[error("branch '{branch}' has no upstream remote configured")]
    NoUpstreamRemote { branch: String },

    #[error("remote '{remote}' has no known default branch")]
    NoDefaultBranch { remote: String },
}
