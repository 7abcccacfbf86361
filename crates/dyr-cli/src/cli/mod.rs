//! CLI for the DYR share-link resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use dyr_core::config::{self, DyrConfig};
use std::path::{Path, PathBuf};

use commands::{run_completions, run_config, run_extract_link, run_resolve};

/// Top-level CLI for the DYR share-link resolver.
#[derive(Debug, Parser)]
#[command(name = "dyr")]
#[command(
    about = "DYR: resolve Douyin share text to a watermark-free video link",
    long_about = None
)]
pub struct Cli {
    /// Use this config file instead of ~/.config/dyr/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve share text and print the JSON result.
    Resolve {
        /// Share text; words are joined with spaces. Read from stdin when omitted.
        text: Vec<String>,
    },

    /// Print the share link found in the text, without any network access.
    ExtractLink {
        /// Share text; words are joined with spaces. Read from stdin when omitted.
        text: Vec<String>,

        /// Print every link found, one per line, in scan order.
        #[arg(long)]
        all: bool,
    },

    /// Show the config file path and the effective configuration.
    Config,

    /// Generate a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    /// Parses argv and runs the command. `Ok(false)` means the command ran but
    /// reported a failure of its own (non-zero exit without an extra message).
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let config_path = cli.config.as_deref();

        let ok = match cli.command {
            CliCommand::Resolve { text } => {
                let cfg = load_config(config_path)?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_resolve(&cfg, &text)?
            }
            CliCommand::ExtractLink { text, all } => run_extract_link(&text, all)?,
            CliCommand::Config => {
                run_config(config_path)?;
                true
            }
            CliCommand::Completions { shell } => {
                run_completions(shell);
                true
            }
        };

        Ok(ok)
    }
}

/// Explicit path must exist; the default location is created on first use.
fn load_config(path: Option<&Path>) -> Result<DyrConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

#[cfg(test)]
mod tests;
