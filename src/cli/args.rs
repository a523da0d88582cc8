//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{ArgGroup, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// toolvers - Compare toolchain versions shipped by operating systems.
#[derive(Debug, Parser)]
#[command(name = "toolvers")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (replaces toolvers.yml and the user config)
    #[arg(short, long, global = true, env = "TOOLVERS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Query the packages of the running system and save its report
    Check,

    /// Query the packages of a container image or Vagrant box
    Collect(CollectArgs),

    /// Generate the comparison site from collected reports
    Build(BuildArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `collect` command.
#[derive(Debug, Clone, clap::Args)]
#[command(group(ArgGroup::new("target").required(true).args(["docker", "vagrant"])))]
pub struct CollectArgs {
    /// Display name of the system, e.g. "Ubuntu 22.04"
    pub description: String,

    /// Run queries in throwaway containers of this image
    #[arg(long, value_name = "IMAGE")]
    pub docker: Option<String>,

    /// Run queries in the Vagrant box defined in this directory
    #[arg(long, value_name = "BOX_DIR")]
    pub vagrant: Option<PathBuf>,
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, clap::Args)]
pub struct BuildArgs {
    /// CI build to publish, or `local` for the reports in the source directory
    #[arg(value_name = "BUILD_ID")]
    pub build_id: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_global_flags() {
        let cli = Cli::try_parse_from(["toolvers", "--debug", "check", "-c", "ci.yml"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.config, Some(PathBuf::from("ci.yml")));
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn parses_collect_docker() {
        let cli =
            Cli::try_parse_from(["toolvers", "collect", "Ubuntu 22.04", "--docker", "ubuntu:22.04"])
                .unwrap();
        let Commands::Collect(args) = cli.command else {
            panic!("expected collect");
        };
        assert_eq!(args.description, "Ubuntu 22.04");
        assert_eq!(args.docker.as_deref(), Some("ubuntu:22.04"));
        assert!(args.vagrant.is_none());
    }

    #[test]
    fn collect_needs_exactly_one_target() {
        assert!(Cli::try_parse_from(["toolvers", "collect", "FreeBSD 14"]).is_err());
        assert!(Cli::try_parse_from([
            "toolvers",
            "collect",
            "FreeBSD 14",
            "--docker",
            "x",
            "--vagrant",
            "boxes/freebsd",
        ])
        .is_err());
    }

    #[test]
    fn build_id_is_optional_for_parsing() {
        let cli = Cli::try_parse_from(["toolvers", "build"]).unwrap();
        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert!(args.build_id.is_none());
    }

    #[test]
    fn build_takes_no_flags() {
        assert!(Cli::try_parse_from(["toolvers", "build", "local", "--force"]).is_err());
    }
}
