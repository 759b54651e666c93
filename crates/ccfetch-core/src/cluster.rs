//! `cluster.idx` entries: where each CDX block lives inside the shard files.
//!
//! A row looks like
//! `0,100,22,165)/ 20240722120756<TAB>cdx-00000.gz<TAB>0<TAB>188224<TAB>1`:
//! the first key of the block, the shard file, and the block's byte offset and
//! compressed length inside that shard.

use crate::downloader::{Downloader, FetchError};
use crate::index::IndexError;

/// Crawl used when none is configured.
pub const DEFAULT_CRAWL: &str = "CC-MAIN-2024-30";

/// Path of a crawl's CDX index directory relative to the archive base URL.
pub fn crawl_index_path(crawl: &str) -> String {
    format!("cc-index/collections/{}/indexes", crawl)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterEntry {
    /// SURT form of the first URL in the block.
    pub surt: String,
    /// 14-digit capture timestamp of that first URL (may be empty).
    pub timestamp: String,
    /// Shard file name, e.g. `cdx-00000.gz`.
    pub cdx_file: String,
    pub offset: u64,
    pub length: u64,
    pub cluster_id: Option<u64>,
}

fn parse_u64(field: &'static str, value: &str) -> Result<u64, IndexError> {
    value.trim().parse().map_err(|_| IndexError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

impl ClusterEntry {
    pub fn from_row(row: &[String]) -> Result<Self, IndexError> {
        if row.len() < 4 {
            return Err(IndexError::MissingField {
                expected: 4,
                actual: row.len(),
            });
        }
        let (surt, timestamp) = match row[0].rsplit_once(' ') {
            Some((s, t)) => (s.to_string(), t.to_string()),
            None => (row[0].clone(), String::new()),
        };
        let cluster_id = match row.get(4) {
            Some(v) => Some(parse_u64("cluster_id", v)?),
            None => None,
        };
        Ok(Self {
            surt,
            timestamp,
            cdx_file: row[1].clone(),
            offset: parse_u64("offset", &row[2])?,
            length: parse_u64("length", &row[3])?,
            cluster_id,
        })
    }

    /// Archive-relative path of the shard holding this block.
    pub fn shard_path(&self, crawl: &str) -> String {
        format!("{}/{}", crawl_index_path(crawl), self.cdx_file)
    }

    /// Download and decompress the CDX block this entry points at.
    pub fn fetch_block<D: Downloader + ?Sized>(
        &self,
        downloader: &D,
        crawl: &str,
    ) -> Result<Vec<u8>, FetchError> {
        downloader.download_and_unzip(&self.shard_path(crawl), self.offset, self.length)
    }
}
