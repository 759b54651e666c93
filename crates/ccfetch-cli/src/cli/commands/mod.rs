//! CLI command handlers, one file per command.

mod fetch;
mod index;
mod lookup;

pub use fetch::run_fetch;
pub use index::run_index;
pub use lookup::run_lookup;

use anyhow::Result;
use ccfetch_core::config::CcConfig;
use ccfetch_core::downloader::CcDownloader;
use ccfetch_core::retry::RetryPolicy;
use ccfetch_core::transport::CurlTransport;

/// Curl-backed downloader built from the loaded config.
fn downloader_from_config(cfg: &CcConfig) -> Result<CcDownloader> {
    let policy = RetryPolicy::from(&cfg.retry_or_default());
    Ok(CcDownloader::with_transport(
        &cfg.base_url,
        policy,
        CurlTransport::default(),
    )?)
}
