mod error;
mod store;

pub use error::ChangesError;
pub use store::{CHANGES_DIR, ChangeStore, is_change_file_path, sanitize_branch_name};

pub type Result<T> = std::result::Result<T, ChangesError>;
