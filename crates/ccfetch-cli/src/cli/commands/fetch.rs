//! Fetch command: download a range and write the decompressed bytes.

use anyhow::{Context, Result};
use ccfetch_core::config::CcConfig;
use ccfetch_core::downloader::Downloader;
use std::io::Write;
use std::path::Path;

pub fn run_fetch(
    cfg: &CcConfig,
    path: &str,
    offset: u64,
    length: u64,
    output: Option<&Path>,
) -> Result<()> {
    let downloader = super::downloader_from_config(cfg)?;
    let data = downloader
        .download_and_unzip(path, offset, length)
        .with_context(|| format!("fetch {} [{}+{}]", path, offset, length))?;
    tracing::info!("fetched {} bytes from {}", data.len(), path);

    match output {
        Some(out) => {
            std::fs::write(out, &data).with_context(|| format!("write {}", out.display()))?
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
