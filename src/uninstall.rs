//! Top-level uninstall sequencing.
//!
//! The strategies run unconditionally in a fixed order (user, system,
//! custom, then user data if requested); each one independently no-ops
//! when its detection marker is absent. The system strategy additionally
//! requires root: without it the strategy is skipped with a warning and
//! the run still succeeds.

use anyhow::Result;
use tracing::debug;

use crate::cli::Cli;
use crate::executor::Executor;
use crate::fs_view::FileSystem;
use crate::host::Host;
use crate::plan;

pub fn run(opts: &Cli, host: &Host, fs: &dyn FileSystem) -> Result<()> {
    if opts.dryrun {
        println!("Uninstalling autojump (DRYRUN)...");
    } else {
        println!("Uninstalling autojump...");
    }

    let executor = Executor::new(fs, opts.dryrun);

    match plan::user_installation(fs, &host.home) {
        Some(found) => executor.apply(&found)?,
        None => debug!("no user installation found"),
    }

    match plan::system_installation(fs) {
        Some(found) if host.is_root => executor.apply(&found)?,
        Some(_) => {
            eprintln!("Please rerun as root for system-wide uninstall, skipping...");
        }
        None => debug!("no system installation found"),
    }

    if let Some(dest_dir) = &opts.destdir {
        match plan::custom_installation(fs, dest_dir, &opts.prefix, &opts.zshshare) {
            Some(found) => executor.apply(&found)?,
            None => debug!("no custom installation under {}", dest_dir.display()),
        }
    }

    if opts.userdata {
        match plan::user_data(fs, host) {
            Some(found) => executor.apply(&found)?,
            None => debug!("no user data found"),
        }
    }

    Ok(())
}
