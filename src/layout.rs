//! Installation layout resolution.
//!
//! An installation mode (user, system, custom) is described by a
//! `(destdir, prefix, zshshare)` triple; [`resolve_layout`] derives the
//! directories that mode would have populated. Pure path arithmetic, no
//! filesystem access.

use std::path::{Path, PathBuf};

/// Directories populated by one installation mode.
///
/// `icon_dir` doubles as the detection marker: a layout counts as
/// installed iff its `icon_dir` exists at check time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationLayout {
    pub bin_dir: PathBuf,
    pub etc_dir: PathBuf,
    pub doc_dir: PathBuf,
    pub icon_dir: PathBuf,
    pub zsh_share_dir: PathBuf,
}

/// Resolve the directory layout for a `(destdir, prefix, zshshare)` triple.
///
/// An absolute `prefix` or `zsh_share` replaces `dest_dir` entirely; the
/// system layout relies on this (destdir `/` with prefix `/usr/local`
/// yields `/usr/local/bin`). An empty `prefix` contributes no path
/// component, so no double separators or trailing-separator artifacts can
/// leak into existence checks.
pub fn resolve_layout(dest_dir: &Path, prefix: &str, zsh_share: &str) -> InstallationLayout {
    let prefixed = join_component(dest_dir, prefix);
    InstallationLayout {
        bin_dir: prefixed.join("bin"),
        etc_dir: dest_dir.join("etc/profile.d"),
        doc_dir: prefixed.join("share/man/man1"),
        icon_dir: prefixed.join("share/autojump"),
        zsh_share_dir: join_component(dest_dir, zsh_share),
    }
}

fn join_component(base: &Path, component: &str) -> PathBuf {
    if component.is_empty() {
        base.to_path_buf()
    } else {
        base.join(component)
    }
}
