//! Ambient host facts: home directory, platform family, privilege.
//!
//! Captured once at startup and passed down explicitly, so removal
//! decisions never query process-global state and stay deterministic
//! under test.

use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::error::UninstallError;

/// Host OS family, as far as user-data resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    /// Apple desktop OS: user data lives under `~/Library`.
    MacOs,
    /// Everything else follows the XDG data-home convention.
    Other,
}

/// Snapshot of the invoking user's identity and environment.
#[derive(Debug, Clone)]
pub struct Host {
    pub home: PathBuf,
    pub platform: PlatformFamily,
    pub is_root: bool,
    /// `XDG_DATA_HOME` override, if set and non-empty.
    pub xdg_data_home: Option<PathBuf>,
}

impl Host {
    /// Capture the real process environment.
    pub fn detect() -> Result<Self> {
        let home = dirs::home_dir().ok_or(UninstallError::NoHomeDir)?;
        Ok(Self {
            home,
            platform: if cfg!(target_os = "macos") {
                PlatformFamily::MacOs
            } else {
                PlatformFamily::Other
            },
            is_root: effective_uid_is_root(),
            xdg_data_home: env::var_os("XDG_DATA_HOME")
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Where the installed tool keeps its persisted user data.
    ///
    /// On non-Apple hosts an `XDG_DATA_HOME` override is used verbatim,
    /// matching how the installed tool resolved its data home.
    pub fn user_data_dir(&self) -> PathBuf {
        match self.platform {
            PlatformFamily::MacOs => self.home.join("Library").join("autojump"),
            PlatformFamily::Other => self
                .xdg_data_home
                .clone()
                .unwrap_or_else(|| self.home.join(".local/share/autojump")),
        }
    }
}

fn effective_uid_is_root() -> bool {
    // SAFETY: geteuid() reads the effective user ID. It has no
    // preconditions, never fails, and modifies no state.
    let euid = unsafe { libc::geteuid() };
    euid == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(platform: PlatformFamily, xdg: Option<&str>) -> Host {
        Host {
            home: PathBuf::from("/home/tester"),
            platform,
            is_root: false,
            xdg_data_home: xdg.map(PathBuf::from),
        }
    }

    #[test]
    fn test_user_data_dir_on_macos() {
        let host = host(PlatformFamily::MacOs, None);
        assert_eq!(
            host.user_data_dir(),
            PathBuf::from("/home/tester/Library/autojump")
        );
    }

    #[test]
    fn test_user_data_dir_xdg_default() {
        let host = host(PlatformFamily::Other, None);
        assert_eq!(
            host.user_data_dir(),
            PathBuf::from("/home/tester/.local/share/autojump")
        );
    }

    #[test]
    fn test_user_data_dir_xdg_override_used_verbatim() {
        let host = host(PlatformFamily::Other, Some("/home/tester/xdg-data"));
        assert_eq!(host.user_data_dir(), PathBuf::from("/home/tester/xdg-data"));
    }

    #[test]
    fn test_macos_ignores_xdg_override() {
        let host = host(PlatformFamily::MacOs, Some("/home/tester/xdg-data"));
        assert_eq!(
            host.user_data_dir(),
            PathBuf::from("/home/tester/Library/autojump")
        );
    }
}
