use std::fmt::Write as _;

use chronicle_core::{EntryComment, Severity};

use crate::entry::{Changelog, ChangelogEntry};

/// Renders the structured changelog into its markdown document.
///
/// Pure and deterministic: the same changelog and `generated_on` stamp
/// always yield byte-identical text. Severity sections are ordered by their
/// display name (Dependency, Major, Minor, Patch), a compatibility contract
/// inherited from mapping-key iteration in the predecessor tooling. `None`
/// comments are never rendered.
#[must_use]
pub fn render(changelog: &Changelog, generated_on: &str) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {}", changelog.name);
    output.push('\n');
    let _ = writeln!(
        output,
        "This log was last generated on {generated_on} and should not be manually modified."
    );

    for entry in &changelog.entries {
        output.push('\n');
        render_entry(&mut output, entry);
    }

    output
}

fn render_entry(output: &mut String, entry: &ChangelogEntry) {
    let _ = writeln!(output, "## {}", entry.version);
    output.push('\n');
    let _ = writeln!(output, "{}", entry.date);

    let mut buckets: Vec<(Severity, &Vec<EntryComment>)> = entry
        .comments
        .iter()
        .filter(|(severity, comments)| **severity != Severity::None && !comments.is_empty())
        .map(|(severity, comments)| (*severity, comments))
        .collect();
    buckets.sort_by_key(|(severity, _)| severity.display_name());

    if buckets.is_empty() {
        output.push('\n');
        let _ = writeln!(output, "This release contains version updates only.");
        return;
    }

    for (severity, comments) in buckets {
        output.push('\n');
        let _ = writeln!(output, "### {} changes", severity.display_name());
        output.push('\n');
        for comment in comments {
            let _ = writeln!(output, "- {}", comment.comment);
        }
    }
}
