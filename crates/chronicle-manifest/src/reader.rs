use std::path::{Path, PathBuf};

use semver::Version;
use toml_edit::DocumentMut;

use crate::MANIFEST_FILE_NAME;
use crate::error::ManifestError;

/// Walks up from `start` to the nearest directory containing a manifest.
///
/// # Errors
///
/// Returns `ManifestError::NotFound` if no ancestor holds one. This is
/// fatal for the caller: the project name and version cannot be invented.
pub fn find_project_root(start: &Path) -> Result<PathBuf, ManifestError> {
    let mut current = Some(start);

    while let Some(dir) = current {
        if dir.join(MANIFEST_FILE_NAME).is_file() {
            return Ok(dir.to_path_buf());
        }
        current = dir.parent();
    }

    Err(ManifestError::NotFound {
        start: start.to_path_buf(),
    })
}

pub(crate) fn read_document(path: &Path) -> Result<DocumentMut, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    content
        .parse::<DocumentMut>()
        .map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// # Errors
///
/// Returns `ManifestError::MissingField` if `package.name` is absent.
pub fn read_name(path: &Path) -> Result<String, ManifestError> {
    let doc = read_document(path)?;

    doc.get("package")
        .and_then(|package| package.get("name"))
        .and_then(|item| item.as_str())
        .map(String::from)
        .ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            field: "package.name".to_string(),
        })
}

/// # Errors
///
/// Returns `ManifestError::MissingField` if `package.version` is absent, or
/// `ManifestError::InvalidVersion` if it is not a valid semantic version.
pub fn read_version(path: &Path) -> Result<Version, ManifestError> {
    let doc = read_document(path)?;

    let version_str = doc
        .get("package")
        .and_then(|package| package.get("version"))
        .and_then(|item| item.as_str())
        .ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            field: "package.version".to_string(),
        })?;

    Version::parse(version_str).map_err(|source| ManifestError::InvalidVersion {
        path: path.to_path_buf(),
        version: version_str.to_string(),
        source,
    })
}
