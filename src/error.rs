//! Error types shared by the library modules.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type.
#[derive(Debug, Error)]
pub enum ToolsError {
    /// A path argument could not be read as a path string.
    #[error("Not a valid path: {0}")]
    InvalidPath(String),

    /// Filesystem failure while preparing the run environment.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ToolsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ToolsError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, ToolsError>;
