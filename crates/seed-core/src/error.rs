//! Error types for filesystem primitives and generators

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single filesystem primitive
#[derive(Debug, Error)]
pub enum FsError {
    #[error("'{}' already exists", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("'{}' is a directory, not a file", path.display())]
    NotAFile { path: PathBuf },

    #[error("failed to {action} '{}'", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        FsError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Failure of a generator run
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("cannot overwrite dir [{root}] because it already exists")]
    RootExists { root: String },

    #[error("provided invalid position [{0}] for a skeleton")]
    InvalidPosition(usize),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("failed to print instructions")]
    Output(#[source] io::Error),
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
