//! CLI for the ytthumb thumbnail downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ytthumb_core::config;

use commands::{run_get, run_id, run_urls, GetOptions};

/// Top-level CLI for ytthumb.
#[derive(Debug, Parser)]
#[command(name = "ytthumb")]
#[command(about = "ytthumb: download YouTube video thumbnails", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the video id contained in a YouTube URL.
    Id {
        /// watch, youtu.be, embed, shorts, v/ or e/ URL.
        url: String,
    },

    /// Print the thumbnail addresses for a YouTube URL (no network access).
    Urls {
        /// watch, youtu.be, embed, shorts, v/ or e/ URL.
        url: String,
        /// Print JSON instead of plain lines.
        #[arg(long)]
        json: bool,
    },

    /// Find the best available thumbnail and save it as `<id>.jpg`.
    Get {
        /// watch, youtu.be, embed, shorts, v/ or e/ URL.
        url: String,
        /// Directory to save into (default: config `download_dir`, else current directory).
        #[arg(long, short = 'o', value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Replace an existing file with the same name.
        #[arg(long)]
        overwrite: bool,
        /// Only try the high-resolution thumbnail.
        #[arg(long)]
        no_fallback: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Id { url } => run_id(&url)?,
            CliCommand::Urls { url, json } => run_urls(&cfg, &url, json)?,
            CliCommand::Get {
                url,
                output_dir,
                overwrite,
                no_fallback,
            } => {
                let opts = GetOptions {
                    output_dir,
                    overwrite,
                    no_fallback,
                };
                run_get(&cfg, &url, opts).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
