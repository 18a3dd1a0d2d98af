//! Filesystem abstraction for testability.
//!
//! Trait-based indirection over the handful of filesystem operations the
//! uninstaller performs, enabling dependency injection for testing
//! removal decisions without real filesystem access. Uses mockall for
//! automatic mock generation in test builds.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

#[cfg(test)]
use mockall::automock;

/// Filesystem operations used by detection and removal.
#[cfg_attr(test, automock)]
pub trait FileSystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Remove a directory and everything beneath it.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// True when no files exist anywhere beneath `path`. A tree holding
    /// only empty subdirectories counts as empty.
    fn is_empty_dir(&self, path: &Path) -> bool;
}

/// Production implementation backed by `std::fs`.
#[derive(Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }

    fn is_empty_dir(&self, path: &Path) -> bool {
        // Any non-directory entry blocks pruning. Unreadable entries are
        // skipped rather than counted as files.
        WalkDir::new(path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .all(|entry| entry.file_type().is_dir())
    }
}

/// Global filesystem instance for production use.
static REAL_FS: RealFileSystem = RealFileSystem;

/// Get a reference to the global real filesystem instance.
pub fn real_fs() -> &'static RealFileSystem {
    &REAL_FS
}
