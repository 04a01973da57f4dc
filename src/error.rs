//! Error types for splitting a level collection.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, SplitError>;

/// Every failure is fatal for the run; nothing is retried or rolled back.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("input file does not exist: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("cannot read input file {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output directory already exists: {}", path.display())]
    DirectoryExists { path: PathBuf },

    /// Creating the output directory or one of the level files failed.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
