use std::fmt;

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Classification of a recorded change. Serialized with the uppercase tags
/// used in the change files (`"MAJOR"`, `"MINOR"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Major,
    Minor,
    Patch,
    /// Never rendered in the changelog document.
    None,
    /// Never triggers a version increment, but renders when present.
    Dependency,
}

impl Severity {
    /// Consolidation precedence: `Major > Minor > Patch`, with `None` and
    /// `Dependency` tied at the bottom and inert for version bumps.
    #[must_use]
    pub fn precedence(self) -> u8 {
        match self {
            Self::Major => 3,
            Self::Minor => 2,
            Self::Patch => 1,
            Self::None | Self::Dependency => 0,
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Patch => "Patch",
            Self::None => "None",
            Self::Dependency => "Dependency",
        }
    }

    /// Longer description shown when the author selects a severity.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Major => "Indicates that these changes are incompatible API changes.",
            Self::Minor => {
                "Indicates that these changes add functionality in a backwards compatible manner."
            }
            Self::Patch => {
                "Indicates that these changes fix bugs in a backwards compatible manner."
            }
            Self::None => {
                "Indicates changes to the source code that do not affect the user (e.g. lint \
                 rules, a readme file, ...)."
            }
            Self::Dependency => "Information about package dependency changes.",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One author-submitted change description. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    pub package_name: String,
    pub comment: String,
    #[serde(rename = "type")]
    pub severity: Severity,
}

impl ChangeRecord {
    #[must_use]
    pub fn new(
        package_name: impl Into<String>,
        comment: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            comment: comment.into(),
            severity,
        }
    }

    /// The record the author flow starts from before any answers arrive.
    #[must_use]
    pub fn default_for_package(package_name: impl Into<String>) -> Self {
        Self::new(package_name, "", Severity::None)
    }
}

/// The on-disk wrapper around one or more change records. The author flow
/// writes one record per file by convention, though the shape allows more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeFile {
    pub changes: Vec<ChangeRecord>,
}

impl ChangeFile {
    #[must_use]
    pub fn single(record: ChangeRecord) -> Self {
        Self {
            changes: vec![record],
        }
    }
}

/// One comment inside a changelog entry bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryComment {
    pub comment: String,
}

/// Comments of one changelog entry, bucketed by severity. Keys present are
/// exactly the severities observed in the publish; insertion order is
/// preserved through serialization.
pub type CommentsBySeverity = IndexMap<Severity, Vec<EntryComment>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_outranks_everything() {
        assert!(Severity::Major.precedence() > Severity::Minor.precedence());
        assert!(Severity::Major.precedence() > Severity::Patch.precedence());
        assert!(Severity::Major.precedence() > Severity::None.precedence());
        assert!(Severity::Major.precedence() > Severity::Dependency.precedence());
    }

    #[test]
    fn none_and_dependency_tie_at_the_bottom() {
        assert_eq!(
            Severity::None.precedence(),
            Severity::Dependency.precedence()
        );
        assert!(Severity::Patch.precedence() > Severity::None.precedence());
    }

    #[test]
    fn severity_serializes_uppercase() {
        let json = serde_json::to_string(&Severity::Major).expect("serialize severity");
        assert_eq!(json, "\"MAJOR\"");

        let back: Severity = serde_json::from_str("\"DEPENDENCY\"").expect("parse severity");
        assert_eq!(back, Severity::Dependency);
    }

    #[test]
    fn unrecognized_severity_is_rejected() {
        let result = serde_json::from_str::<Severity>("\"CRITICAL\"");
        assert!(result.is_err());
    }

    #[test]
    fn change_record_uses_original_field_names() {
        let record = ChangeRecord::new("my-project", "fix bug", Severity::Patch);
        let json = serde_json::to_string(&record).expect("serialize record");

        assert!(json.contains("\"packageName\":\"my-project\""));
        assert!(json.contains("\"type\":\"PATCH\""));
        assert!(!json.contains("severity"));
    }

    #[test]
    fn change_file_round_trips() {
        let file = ChangeFile::single(ChangeRecord::new("pkg", "break api", Severity::Major));
        let json = serde_json::to_string(&file).expect("serialize file");
        let back: ChangeFile = serde_json::from_str(&json).expect("parse file");
        assert_eq!(back, file);
    }

    #[test]
    fn default_record_has_empty_comment_and_none_severity() {
        let record = ChangeRecord::default_for_package("pkg");
        assert_eq!(record.package_name, "pkg");
        assert_eq!(record.comment, "");
        assert_eq!(record.severity, Severity::None);
    }

    #[test]
    fn display_names_are_capitalized() {
        assert_eq!(Severity::Major.to_string(), "Major");
        assert_eq!(Severity::Dependency.to_string(), "Dependency");
    }
}
