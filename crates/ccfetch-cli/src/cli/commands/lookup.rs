//! Lookup command: resolve a cluster index row to its CDX records.

use anyhow::{Context, Result};
use ccfetch_core::cdx;
use ccfetch_core::cluster::ClusterEntry;
use ccfetch_core::config::CcConfig;
use ccfetch_core::index::TsvIndexReader;
use std::path::Path;

pub fn run_lookup(cfg: &CcConfig, file: &Path, row: usize, crawl: &str) -> Result<()> {
    let fields = TsvIndexReader::open(file)?
        .nth(row)
        .with_context(|| format!("{} has no row {}", file.display(), row))??;
    let entry = ClusterEntry::from_row(&fields)?;
    tracing::debug!("row {} -> {:?}", row, entry);

    let downloader = super::downloader_from_config(cfg)?;
    let block = entry
        .fetch_block(&downloader, crawl)
        .with_context(|| format!("fetch block {} of {}", row, entry.shard_path(crawl)))?;

    for record in cdx::parse_block(&block) {
        let record = record?;
        println!(
            "{} {} {}",
            record.timestamp,
            record.status().map_or_else(|| "-".to_string(), |s| s.to_string()),
            record.url().unwrap_or("-")
        );
    }
    Ok(())
}
