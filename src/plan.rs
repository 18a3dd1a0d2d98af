//! Per-strategy removal planning.
//!
//! Each installation strategy is a pure function from the options and a
//! filesystem view to an optional [`StrategyPlan`]; the executor applies
//! plans separately. A strategy whose detection marker is absent plans
//! nothing at all.

use std::path::{Path, PathBuf};

use crate::fs_view::FileSystem;
use crate::host::Host;
use crate::layout::{resolve_layout, InstallationLayout};

/// Files installed into the layout's bin directory.
const BIN_FILES: &[&str] = &["autojump", "autojump_data.py", "autojump_utils.py"];

/// Shell integration hooks installed into etc/profile.d.
const PROFILE_HOOKS: &[&str] = &[
    "autojump.sh",
    "autojump.bash",
    "autojump.fish",
    "autojump.zsh",
];

const ZSH_COMPLETION: &str = "_j";
const MAN_PAGE: &str = "autojump.1";

/// Per-user installation root under the home directory.
const USER_INSTALL_DIR: &str = ".autojump";

/// System-wide layout constants.
const SYSTEM_DESTDIR: &str = "/";
const SYSTEM_PREFIX: &str = "/usr/local";
const SYSTEM_ZSH_SHARE: &str = "/usr/share/zsh/site-functions";

/// One deferred filesystem mutation. Existence is re-checked at execution
/// time, so a plan computed against a stale view stays harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    DeleteFile(PathBuf),
    DeleteTree(PathBuf),
    /// Remove the tree only if no files remain anywhere beneath it.
    DeleteTreeIfEmpty(PathBuf),
}

/// Everything one detected strategy wants to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyPlan {
    pub notice: &'static str,
    pub actions: Vec<Action>,
}

/// Plan removal of a per-user installation (`~/.autojump`).
///
/// Single marker, single target: the whole dotfile tree goes at once.
pub fn user_installation(fs: &dyn FileSystem, home: &Path) -> Option<StrategyPlan> {
    let root = home.join(USER_INSTALL_DIR);
    if !fs.exists(&root) {
        return None;
    }
    Some(StrategyPlan {
        notice: "Found user installation...",
        actions: vec![Action::DeleteTree(root)],
    })
}

/// Plan removal of a system-wide installation under `/usr/local`.
///
/// The privilege gate lives in the orchestrator; planning only inspects
/// the filesystem. The destdir `/` is never pruned, empty or not.
pub fn system_installation(fs: &dyn FileSystem) -> Option<StrategyPlan> {
    let layout = resolve_layout(Path::new(SYSTEM_DESTDIR), SYSTEM_PREFIX, SYSTEM_ZSH_SHARE);
    if !fs.exists(&layout.icon_dir) {
        return None;
    }
    Some(StrategyPlan {
        notice: "Found system installation...",
        actions: artifact_actions(&layout),
    })
}

/// Plan removal of an installation under a caller-supplied destdir.
///
/// Mirrors the system artifact set, then prunes the destdir itself when
/// nothing file-wise is left beneath it.
pub fn custom_installation(
    fs: &dyn FileSystem,
    dest_dir: &Path,
    prefix: &str,
    zsh_share: &str,
) -> Option<StrategyPlan> {
    let layout = resolve_layout(dest_dir, prefix, zsh_share);
    if !fs.exists(&layout.icon_dir) {
        return None;
    }
    let mut actions = artifact_actions(&layout);
    actions.push(Action::DeleteTreeIfEmpty(dest_dir.to_path_buf()));
    Some(StrategyPlan {
        notice: "Found custom installation...",
        actions,
    })
}

/// Plan removal of persisted user data. Always whole-tree removal.
pub fn user_data(fs: &dyn FileSystem, host: &Host) -> Option<StrategyPlan> {
    let data_home = host.user_data_dir();
    if !fs.exists(&data_home) {
        return None;
    }
    Some(StrategyPlan {
        notice: "Found user data...",
        actions: vec![Action::DeleteTree(data_home)],
    })
}

/// The fixed artifact set shared by the system and custom strategies:
/// bin files, profile.d hooks, zsh completion, icon tree, man page.
fn artifact_actions(layout: &InstallationLayout) -> Vec<Action> {
    let mut actions = Vec::with_capacity(10);
    for name in BIN_FILES {
        actions.push(Action::DeleteFile(layout.bin_dir.join(name)));
    }
    for name in PROFILE_HOOKS {
        actions.push(Action::DeleteFile(layout.etc_dir.join(name)));
    }
    actions.push(Action::DeleteFile(layout.zsh_share_dir.join(ZSH_COMPLETION)));
    actions.push(Action::DeleteTree(layout.icon_dir.clone()));
    actions.push(Action::DeleteFile(layout.doc_dir.join(MAN_PAGE)));
    actions
}
