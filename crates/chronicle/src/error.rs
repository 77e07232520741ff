use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Git(#[from] chronicle_git::GitError),

    #[error(transparent)]
    Changes(#[from] chronicle_changes::ChangesError),

    #[error(transparent)]
    Changelog(#[from] chronicle_changelog::ChangelogError),

    #[error(transparent)]
    Manifest(#[from] chronicle_manifest::ManifestError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("failed to resolve current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("interactive prompts require a terminal; pass --message and --type to run without them")]
    NotATty,

    #[error("operation cancelled by user")]
    Cancelled,

    #[error("source changes were detected but no change file exists for branch '{branch}'")]
    MissingChangeFile { branch: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
