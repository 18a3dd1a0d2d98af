//! # autojump-uninstall
//!
//! Removes autojump installations and their shell integration hooks.
//!
//! autojump may have been installed in any of three independent modes:
//! per-user (under `~/.autojump`), system-wide (under `/usr/local`), or
//! under a caller-supplied destdir/prefix. Each mode leaves a detection
//! marker on disk; every run checks all of them and removes whatever it
//! finds, so running the uninstaller twice is a no-op the second time.
//! Persisted user data is only touched when explicitly requested.
//!
//! Decision logic and mutation are kept apart: each strategy plans its
//! removals as a pure function of the options and a filesystem view
//! ([`plan`]), and a separate executor applies or, in dry-run mode, merely
//! reports them ([`executor`]).
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions
//! - [`error`] - Error types
//! - [`executor`] - Applies removal plans (dry-run aware)
//! - [`fs_view`] - Filesystem abstraction for testability
//! - [`host`] - Home directory, platform family, and privilege snapshot
//! - [`layout`] - Installation layout resolution
//! - [`plan`] - Per-strategy removal planning
//! - [`uninstall`] - Top-level sequencing

pub mod cli;
pub mod error;
pub mod executor;
pub mod fs_view;
pub mod host;
pub mod layout;
pub mod plan;
pub mod uninstall;

pub use cli::Cli;
