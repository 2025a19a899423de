//! CLI for ckfetch.

mod commands;
pub mod web;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ckfetch_core::config::{self, CkfetchConfig};
use std::path::{Path, PathBuf};

use commands::{run_checksum, run_fetch, run_serve, run_show};

/// Top-level CLI for ckfetch.
#[derive(Debug, Parser)]
#[command(name = "ckfetch")]
#[command(about = "ckfetch: fetch a checksummed payload, store it, verify it", long_about = None)]
pub struct Cli {
    /// Remote endpoint returning {"data", "checksum"} (overrides config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub remote_url: Option<String>,

    /// Directory for the stored artifact (overrides config.toml).
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Serve the web page and the /fetch endpoint.
    Serve {
        /// Listen address, e.g. 0.0.0.0:5001 (overrides config.toml).
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Fetch once, store the data and print the verification report.
    Fetch,

    /// Print the stored artifact from the last fetch.
    Show,

    /// Compute SHA-256 of a file (e.g. the stored artifact).
    Checksum {
        /// Path to the file.
        path: String,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, cfg: &mut CkfetchConfig) {
        if let Some(url) = &self.remote_url {
            cfg.remote_url = url.clone();
        }
        if let Some(dir) = &self.data_dir {
            cfg.data_dir = Some(dir.clone());
        }
        if let CliCommand::Serve { bind: Some(addr) } = &self.command {
            cfg.bind_addr = addr.clone();
        }
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        cli.apply_overrides(&mut cfg);
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Serve { .. } => run_serve(&cfg).await?,
            CliCommand::Fetch => run_fetch(&cfg).await?,
            CliCommand::Show => run_show(&cfg)?,
            CliCommand::Checksum { path } => run_checksum(Path::new(&path))?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
