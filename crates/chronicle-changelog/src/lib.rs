mod entry;
mod error;
mod render;
mod store;

pub use entry::{Changelog, ChangelogEntry};
pub use error::ChangelogError;
pub use render::render;
pub use store::{CHANGELOG_JSON, CHANGELOG_MD, ChangelogStore};

pub type Result<T> = std::result::Result<T, ChangelogError>;
