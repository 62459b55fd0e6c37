//! Core library entry for the `sitewright` CLI.

pub mod adapters;
pub mod artifact;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod error;
pub mod generator;
pub mod graph;
pub mod pipeline;
pub mod ports;
pub mod repair;
pub mod report;
pub mod resolver;
pub mod selection;
pub mod validate;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
