//! Error types for the uninstaller.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures. Missing paths are never errors (removal is idempotent);
/// only a delete that fails on a confirmed-existing path surfaces here.
#[derive(Error, Debug)]
pub enum UninstallError {
    #[error("could not determine the current user's home directory")]
    NoHomeDir,

    #[error("failed to delete file {path}")]
    DeleteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to delete directory {path}")]
    DeleteTree {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
