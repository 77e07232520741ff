use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChangesError {
    #[error("failed to list change files in '{path}'")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read change file '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid change file '{path}'")]
    InvalidChangeFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to create change directory '{path}'")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write change file '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize change file")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to delete change file '{path}'")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
