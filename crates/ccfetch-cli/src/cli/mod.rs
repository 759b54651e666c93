//! CLI for ccfetch.

mod commands;

use anyhow::Result;
use ccfetch_core::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_fetch, run_index, run_lookup};

/// Top-level CLI for ccfetch.
#[derive(Debug, Parser)]
#[command(name = "ccfetch")]
#[command(about = "Fetch byte ranges and index blocks from the Common Crawl archive", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a gzip byte range and write it decompressed.
    Fetch {
        /// Path relative to the archive base URL.
        path: String,
        /// Byte offset of the range.
        offset: u64,
        /// Length of the range in bytes.
        length: u64,
        /// Write to this file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the rows of a tab-separated index file.
    Index {
        /// Path to the index file (e.g. cluster.idx).
        file: PathBuf,
        /// Stop after N rows.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Fetch the CDX block referenced by one row of a cluster index.
    Lookup {
        /// Path to the cluster index file.
        file: PathBuf,
        /// Zero-based row number.
        row: usize,
        /// Crawl collection; defaults to the configured crawl.
        #[arg(long)]
        crawl: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                path,
                offset,
                length,
                output,
            } => run_fetch(&cfg, &path, offset, length, output.as_deref())?,
            CliCommand::Index { file, limit } => run_index(&file, limit)?,
            CliCommand::Lookup { file, row, crawl } => {
                let crawl = crawl.unwrap_or_else(|| cfg.crawl.clone());
                run_lookup(&cfg, &file, row, &crawl)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
