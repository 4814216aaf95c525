//! CLI for the Pixelbin URL codec.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

use commands::{run_build, run_completions, run_config, run_parse};

/// Top-level CLI for the Pixelbin SDK tools.
#[derive(Debug, Parser)]
#[command(name = "pixelbin")]
#[command(about = "Pixelbin: convert between CDN transformation URLs and JSON objects", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a CDN URL and print it as a JSON object.
    Parse {
        /// Pixelbin CDN URL.
        url: String,
    },

    /// Build a CDN URL from a JSON object.
    Build {
        /// Read the object from this file instead of stdin.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Show the client configuration and check the API secret.
    Config {
        /// Read this config file instead of the XDG default.
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut out = io::stdout().lock();

        match cli.command {
            CliCommand::Parse { url } => run_parse(&url, &mut out)?,
            CliCommand::Build { file } => run_build(file.as_deref(), &mut out)?,
            CliCommand::Config { path } => run_config(path.as_deref(), &mut out)?,
            CliCommand::Completions { shell } => run_completions(shell, &mut out),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
