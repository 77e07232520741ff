use std::path::Path;

use chrono::Local;
use tracing::info;

use chronicle_changelog::{CHANGELOG_JSON, CHANGELOG_MD, Changelog, ChangelogEntry, ChangelogStore, render};
use chronicle_changes::ChangeStore;
use chronicle_core::ChangeRecord;
use chronicle_version::{apply_bump, consolidate};

use super::PublishArgs;
use crate::error::Result;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Runs the publish sequence: collect pending change files, consolidate
/// them into one bump and one changelog entry, then either preview
/// (default) or persist.
///
/// Apply-mode writes happen in a fixed order (structured changelog,
/// rendered document, manifest version, change-file deletion) with no
/// rollback: a failure part-way leaves the earlier writes in place and is
/// reported to the caller.
pub(super) fn run(args: &PublishArgs, start_path: &Path) -> Result<()> {
    let project_root = chronicle_manifest::find_project_root(start_path)?;
    let manifest_path = project_root.join(chronicle_manifest::MANIFEST_FILE_NAME);

    let store = ChangeStore::new(&project_root);
    let change_paths = store.list_all()?;

    if change_paths.is_empty() {
        println!("No change files were found. Nothing to do.");
        return Ok(());
    }

    let mut records: Vec<ChangeRecord> = Vec::new();
    for path in &change_paths {
        records.extend(store.read(path)?.changes);
    }

    let project_name = chronicle_manifest::read_name(&manifest_path)?;
    let current_version = chronicle_manifest::read_version(&manifest_path)?;

    let changelog_store = ChangelogStore::new(&project_root);
    let mut changelog = match changelog_store.load()? {
        Some(changelog) => changelog,
        // A missing changelog is bootstrapped on apply only; a dry run
        // must not create files.
        None if args.apply => changelog_store.bootstrap(&project_name)?,
        None => Changelog::new(project_name.clone()),
    };

    let consolidation = consolidate(&records);
    let new_version = apply_bump(&current_version, consolidation.flags);

    let now = Local::now().format(DATE_FORMAT).to_string();
    changelog.prepend(ChangelogEntry {
        version: new_version.to_string(),
        date: now.clone(),
        comments: consolidation.comments,
    });

    let rendered = render(&changelog, &now);

    if !args.apply {
        println!("{rendered}");
        if new_version == current_version {
            println!("Version would remain {current_version}.");
        } else {
            println!("Version would change from {current_version} to {new_version}.");
        }
        println!("Dry run: no files were written. Pass --apply to persist.");
        return Ok(());
    }

    changelog_store.persist_structured(&changelog)?;
    changelog_store.persist_rendered(&rendered)?;
    chronicle_manifest::write_version(&manifest_path, &new_version)?;
    store.delete_all(&change_paths)?;

    info!(
        version = %new_version,
        entries = changelog.entries.len(),
        consumed = change_paths.len(),
        "published changelog"
    );

    println!("Updated {CHANGELOG_JSON} and {CHANGELOG_MD}.");
    if new_version == current_version {
        println!("Version remains {current_version}.");
    } else {
        println!("Bumped version: {current_version} -> {new_version}");
    }
    println!("Deleted {} change file(s).", change_paths.len());
    Ok(())
}
