mod error;
mod reader;
mod writer;

pub use error::ManifestError;
pub use reader::{find_project_root, read_name, read_version};
pub use writer::write_version;

pub type Result<T> = std::result::Result<T, ManifestError>;

/// File the project name and version are read from, and whose `version`
/// field is rewritten on an apply-mode publish.
pub const MANIFEST_FILE_NAME: &str = "Cargo.toml";
