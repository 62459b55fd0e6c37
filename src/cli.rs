//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `sitewright`.
#[derive(Debug, Parser)]
#[command(name = "sitewright", version, about = "Generate structurally sound website projects")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a project from a feature selection file.
    Generate {
        /// Path to the feature selection JSON file.
        selection: PathBuf,
        /// Output directory; defaults to the project slug.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show the resolved file manifest for a selection without generating.
    Manifest {
        /// Path to the feature selection JSON file.
        selection: PathBuf,
    },
    /// List the available features.
    Features,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_generate_with_out_dir() {
        let cli = Cli::parse_from(["sitewright", "generate", "selection.json", "--out", "dist"]);
        match cli.command {
            Command::Generate { selection, out } => {
                assert_eq!(selection.to_str(), Some("selection.json"));
                assert_eq!(out.as_deref().and_then(|p| p.to_str()), Some("dist"));
            }
            other => panic!("parsed wrong command: {other:?}"),
        }
    }

    #[test]
    fn parses_features_subcommand() {
        let cli = Cli::parse_from(["sitewright", "features"]);
        assert!(matches!(cli.command, Command::Features));
    }

    #[test]
    fn generate_requires_a_selection_path() {
        assert!(Cli::try_parse_from(["sitewright", "generate"]).is_err());
    }
}
