use chronicle_core::{ChangeRecord, CommentsBySeverity, EntryComment, Severity};
use semver::Version;

/// Accumulated bump decision over a sequence of change records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpFlags {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
}

impl BumpFlags {
    /// Folds one severity into the accumulated flags. A `Major` clears the
    /// lower flags and wins permanently; `Minor` registers only while no
    /// major was seen and clears `Patch`; `Patch` registers only while
    /// nothing stronger was seen. `None` and `Dependency` are inert.
    #[must_use]
    pub fn fold(self, severity: Severity) -> Self {
        match severity {
            Severity::Major => Self {
                major: true,
                minor: false,
                patch: false,
            },
            Severity::Minor if !self.major => Self {
                minor: true,
                patch: false,
                ..self
            },
            Severity::Patch if !self.major && !self.minor => Self {
                patch: true,
                ..self
            },
            _ => self,
        }
    }

    #[must_use]
    pub fn is_bump(self) -> bool {
        self.major || self.minor || self.patch
    }
}

/// Outcome of consolidating the pending change records: the bump decision
/// plus every comment bucketed under its own severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consolidation {
    pub flags: BumpFlags,
    pub comments: CommentsBySeverity,
}

/// Single pass over the pending records in encounter order (file order, then
/// in-file order). Ordering affects only comment order within a bucket,
/// never the resulting version.
#[must_use]
pub fn consolidate<'a, I>(records: I) -> Consolidation
where
    I: IntoIterator<Item = &'a ChangeRecord>,
{
    let mut flags = BumpFlags::default();
    let mut comments = CommentsBySeverity::new();

    for record in records {
        flags = flags.fold(record.severity);
        comments
            .entry(record.severity)
            .or_default()
            .push(EntryComment {
                comment: record.comment.clone(),
            });
    }

    Consolidation { flags, comments }
}

/// Applies the consolidated bump: major wins, then minor, then patch; no
/// flag set leaves the version untouched. A bump discards any pre-release
/// or build metadata.
#[must_use]
pub fn apply_bump(version: &Version, flags: BumpFlags) -> Version {
    if flags.major {
        Version::new(version.major + 1, 0, 0)
    } else if flags.minor {
        Version::new(version.major, version.minor + 1, 0)
    } else if flags.patch {
        Version::new(version.major, version.minor, version.patch + 1)
    } else {
        version.clone()
    }
}
