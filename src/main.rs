//! autojump-uninstall - removes autojump installations and shell hooks.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use autojump_uninstall::cli::Cli;
use autojump_uninstall::fs_view::real_fs;
use autojump_uninstall::host::Host;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity. Diagnostics go to stderr; stdout
    // carries only the notices and trace lines.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let host = Host::detect()?;
    autojump_uninstall::uninstall::run(&cli, &host, real_fs())
}
