use std::path::{Path, PathBuf};

use tracing::debug;

use chronicle_changes::{ChangeStore, is_change_file_path};
use chronicle_core::{ChangeFile, ChangeRecord};
use chronicle_git::Repository;

use super::ChangeArgs;
use crate::environment::is_interactive;
use crate::error::{CliError, Result};
use crate::interaction::{Prompter, TerminalPrompter};

pub(super) fn run(args: &ChangeArgs, start_path: &Path) -> Result<()> {
    let project_root = chronicle_manifest::find_project_root(start_path)?;
    let repo = Repository::open(&project_root)?;

    let branch = repo.current_branch()?;
    let remote = repo.remote_for_branch(&branch)?;
    let default_branch = repo.default_branch(&remote)?;

    let diff = repo.diff_summary(&remote, &default_branch, &branch)?;
    let source_paths: Vec<&PathBuf> = diff
        .changed_paths
        .iter()
        .filter(|path| !is_change_file_path(path))
        .collect();

    debug!(
        %branch,
        %remote,
        %default_branch,
        source_changes = source_paths.len(),
        "inspected branch"
    );

    let store = ChangeStore::new(&project_root);

    if args.verify {
        return verify(&store, &branch, source_paths.is_empty());
    }

    if source_paths.is_empty() {
        println!("No changes detected between '{branch}' and '{remote}/{default_branch}'. Nothing to do.");
        return Ok(());
    }

    println!("Changes against '{remote}/{default_branch}':");
    for path in &source_paths {
        println!("  {}", path.display());
    }
    println!("{}", diff.short_stat);

    let existing = store.list_for_branch(&branch)?;
    if !existing.is_empty() {
        println!();
        println!("Found {} existing change file(s) for this branch.", existing.len());
    }

    let needs_prompt = args.message.is_none() || args.severity.is_none();
    if needs_prompt && !is_interactive() {
        return Err(CliError::NotATty);
    }

    let manifest_path = project_root.join(chronicle_manifest::MANIFEST_FILE_NAME);
    let package_name = chronicle_manifest::read_name(&manifest_path)?;

    println!();
    match collect_record(args, &TerminalPrompter, package_name)? {
        Some(record) => {
            let path = store.save(&ChangeFile::single(record), &branch)?;
            println!("Created change file: {}", path.display());
        }
        None => println!("Discarded."),
    }

    Ok(())
}

/// Asks for whatever `--message`/`--type` did not provide. The confirmation
/// question is skipped when both flags were given.
fn collect_record(
    args: &ChangeArgs,
    prompter: &dyn Prompter,
    package_name: String,
) -> Result<Option<ChangeRecord>> {
    let comment = match &args.message {
        Some(message) => message.clone(),
        None => prompter.ask_comment()?,
    };

    let severity = match args.severity {
        Some(severity) => severity,
        None => prompter.ask_severity()?,
    };

    let confirmed = if args.message.is_some() && args.severity.is_some() {
        true
    } else {
        prompter.confirm("Save this change record?")?
    };

    Ok(confirmed.then(|| ChangeRecord::new(package_name, comment, severity)))
}

/// Read-only verification: every change file recorded for the branch must
/// parse, and source changes without any change file are a failure.
fn verify(store: &ChangeStore, branch: &str, no_source_changes: bool) -> Result<()> {
    let paths = store.list_for_branch(branch)?;

    for path in &paths {
        store.read(path)?;
    }

    if no_source_changes {
        println!("No source changes detected for branch '{branch}'.");
        return Ok(());
    }

    if paths.is_empty() {
        return Err(CliError::MissingChangeFile {
            branch: branch.to_string(),
        });
    }

    println!("Verified {} change file(s) for branch '{branch}'.", paths.len());
    Ok(())
}
