//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

/// Invocation options. Immutable for the duration of one run.
#[derive(Parser, Debug)]
#[command(name = "autojump-uninstall")]
#[command(author, version, about = "Uninstalls autojump.")]
pub struct Cli {
    /// Simulate the uninstallation without removing anything
    #[arg(short = 'n', long = "dryrun")]
    pub dryrun: bool,

    /// Also delete persisted user data
    #[arg(short = 'u', long = "userdata")]
    pub userdata: bool,

    /// Custom destdir to inspect for an installation
    #[arg(short = 'd', long = "destdir", value_name = "DIR")]
    pub destdir: Option<PathBuf>,

    /// Custom prefix under the destdir for bin/share paths
    #[arg(short = 'p', long = "prefix", value_name = "DIR", default_value = "")]
    pub prefix: String,

    /// Custom zsh completion directory under the destdir
    #[arg(
        short = 'z',
        long = "zshshare",
        value_name = "DIR",
        default_value = "functions"
    )]
    pub zshshare: String,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["autojump-uninstall"]).unwrap();
        assert!(!cli.dryrun);
        assert!(!cli.userdata);
        assert!(cli.destdir.is_none());
        assert_eq!(cli.prefix, "");
        assert_eq!(cli.zshshare, "functions");
    }

    #[test]
    fn test_cli_dryrun_flag() {
        let cli = Cli::try_parse_from(["autojump-uninstall", "--dryrun"]).unwrap();
        assert!(cli.dryrun);

        let cli = Cli::try_parse_from(["autojump-uninstall", "-n"]).unwrap();
        assert!(cli.dryrun);
    }

    #[test]
    fn test_cli_userdata_flag() {
        let cli = Cli::try_parse_from(["autojump-uninstall", "-u"]).unwrap();
        assert!(cli.userdata);
    }

    #[test]
    fn test_cli_custom_destdir() {
        let cli = Cli::try_parse_from([
            "autojump-uninstall",
            "--destdir",
            "/tmp/X",
            "--prefix",
            "/local",
            "--zshshare",
            "completions",
        ])
        .unwrap();
        assert_eq!(cli.destdir, Some(PathBuf::from("/tmp/X")));
        assert_eq!(cli.prefix, "/local");
        assert_eq!(cli.zshshare, "completions");
    }

    #[test]
    fn test_cli_short_flags() {
        let cli =
            Cli::try_parse_from(["autojump-uninstall", "-d", "/opt/aj", "-p", "usr", "-n", "-u"])
                .unwrap();
        assert_eq!(cli.destdir, Some(PathBuf::from("/opt/aj")));
        assert_eq!(cli.prefix, "usr");
        assert!(cli.dryrun);
        assert!(cli.userdata);
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::try_parse_from(["autojump-uninstall", "-q", "-v"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.verbose);
    }
}
