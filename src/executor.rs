//! Applies removal plans against the filesystem.
//!
//! Every action re-checks existence at execution time, so removal is
//! idempotent and a path that vanished since planning is a silent no-op.
//! One trace line is printed per performed (or, in dry-run mode, merely
//! simulated) mutation; dry-run performs zero mutating calls.

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::error::UninstallError;
use crate::fs_view::FileSystem;
use crate::plan::{Action, StrategyPlan};

pub struct Executor<'a> {
    fs: &'a dyn FileSystem,
    dry_run: bool,
}

impl<'a> Executor<'a> {
    pub fn new(fs: &'a dyn FileSystem, dry_run: bool) -> Self {
        Self { fs, dry_run }
    }

    /// Announce the plan's notice, then apply its actions in order.
    pub fn apply(&self, plan: &StrategyPlan) -> Result<()> {
        println!();
        println!("{}", plan.notice);
        for action in &plan.actions {
            self.apply_action(action)?;
        }
        Ok(())
    }

    fn apply_action(&self, action: &Action) -> Result<()> {
        match action {
            Action::DeleteFile(path) => {
                if !self.fs.exists(path) {
                    return Ok(());
                }
                println!("deleting file: {}", path.display());
                if !self.dry_run {
                    self.fs
                        .remove_file(path)
                        .map_err(|source| UninstallError::DeleteFile {
                            path: path.clone(),
                            source,
                        })?;
                }
                Ok(())
            }
            Action::DeleteTree(path) => self.delete_tree(path),
            Action::DeleteTreeIfEmpty(path) => {
                if self.fs.exists(path) && !self.fs.is_empty_dir(path) {
                    debug!("{} still holds files, keeping it", path.display());
                    return Ok(());
                }
                self.delete_tree(path)
            }
        }
    }

    fn delete_tree(&self, path: &Path) -> Result<()> {
        if !self.fs.exists(path) {
            return Ok(());
        }
        println!("deleting directory: {}", path.display());
        if !self.dry_run {
            self.fs
                .remove_dir_all(path)
                .map_err(|source| UninstallError::DeleteTree {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        Ok(())
    }
}
