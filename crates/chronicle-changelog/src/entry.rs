use serde::{Deserialize, Serialize};

use chronicle_core::CommentsBySeverity;

/// One published version: the version string, the date it was published,
/// and its comments bucketed by severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub version: String,
    pub date: String,
    pub comments: CommentsBySeverity,
}

/// The persisted structured changelog. The structured file is the single
/// source of truth; the rendered document is derived from it in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changelog {
    pub name: String,
    pub entries: Vec<ChangelogEntry>,
}

impl Changelog {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Entries live newest-first; insertion order is never re-sorted.
    pub fn prepend(&mut self, entry: ChangelogEntry) {
        self.entries.insert(0, entry);
    }
}
