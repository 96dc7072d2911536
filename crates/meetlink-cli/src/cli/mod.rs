//! CLI for the meetlink Teams deep-link extractor.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use meetlink_core::config;

use commands::{run_copy, run_extract, run_open};

/// Top-level CLI for the meetlink extractor.
#[derive(Debug, Parser)]
#[command(name = "meetlink")]
#[command(
    about = "Rebuild a clean Teams chat deep link from a messy meeting URL",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract the thread identifier and print the canonical chat link.
    Extract {
        /// Raw link or text to search; read from stdin when omitted.
        input: Option<String>,

        /// Open the link in the default browser on success.
        #[arg(long)]
        open: bool,

        /// Copy the link to the clipboard on success.
        #[arg(long)]
        copy: bool,
    },

    /// Extract and copy the canonical chat link to the clipboard.
    Copy {
        /// Raw link or text to search; read from stdin when omitted.
        input: Option<String>,
    },

    /// Extract and open the canonical chat link in the default browser.
    Open {
        /// Raw link or text to search; read from stdin when omitted.
        input: Option<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Extract { input, open, copy } => {
                run_extract(&cfg, input, open, copy).await?;
            }
            CliCommand::Copy { input } => run_copy(&cfg, input).await?,
            CliCommand::Open { input } => run_open(input)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
