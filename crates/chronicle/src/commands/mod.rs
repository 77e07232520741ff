mod change;
mod publish;

use std::path::Path;

use clap::{Args, Subcommand};

use chronicle_core::Severity;

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Record a change description for the current branch
    Change(ChangeArgs),
    /// Consolidate pending change files into a version bump and changelog
    Publish(PublishArgs),
}

#[derive(Args)]
pub(crate) struct ChangeArgs {
    /// Verify that a valid change file exists for the detected changes
    /// instead of creating one
    #[arg(long, short = 'v')]
    pub(crate) verify: bool,

    /// Change description; skips the comment prompt
    #[arg(long, short = 'm')]
    pub(crate) message: Option<String>,

    /// Change severity; skips the severity prompt
    #[arg(long = "type", short = 't', value_enum)]
    pub(crate) severity: Option<Severity>,
}

#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Persist the consolidated changelog, version, and file deletions;
    /// the default is a read-only preview
    #[arg(long, short = 'a')]
    pub(crate) apply: bool,
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path) -> Result<()> {
        match self {
            Self::Change(args) => change::run(&args, start_path),
            Self::Publish(args) => publish::run(&args, start_path),
        }
    }
}
