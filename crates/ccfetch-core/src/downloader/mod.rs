//! Retrying range downloader for gzip-compressed archive segments.
//!
//! [`CcDownloader`] joins a relative path onto the archive base URL, issues a
//! Range GET through its [`RangeTransport`], retries network and HTTP failures
//! with exponential backoff, and gunzips the body. A body that fails to
//! decompress is returned as [`FetchError::Decompress`] straight away.

mod error;

pub use error::FetchError;

use crate::range::ByteRange;
use crate::retry::{run_with_retry, RetryPolicy};
use crate::transport::{CurlTransport, RangeTransport};
use flate2::bufread::GzDecoder;
use std::io::Read;
use std::time::Duration;

/// Public base URL of the Common Crawl archive.
pub const BASE_URL: &str = "https://data.commoncrawl.org";

/// Something that can fetch a byte range of an archive file and return it
/// decompressed.
pub trait Downloader {
    fn download_and_unzip(&self, path: &str, start: u64, length: u64)
        -> Result<Vec<u8>, FetchError>;
}

impl<D: Downloader + ?Sized> Downloader for &D {
    fn download_and_unzip(
        &self,
        path: &str,
        start: u64,
        length: u64,
    ) -> Result<Vec<u8>, FetchError> {
        (**self).download_and_unzip(path, start, length)
    }
}

type SleepFn = Box<dyn Fn(Duration)>;

/// Downloader for `data.commoncrawl.org`-style archives.
pub struct CcDownloader<T = CurlTransport> {
    base_url: String,
    policy: RetryPolicy,
    transport: T,
    sleep: SleepFn,
}

impl CcDownloader<CurlTransport> {
    /// Downloader using libcurl with `max_retries` attempts and
    /// `backoff_factor` seconds of base delay.
    pub fn new(base_url: &str, max_retries: u32, backoff_factor: f64) -> Result<Self, FetchError> {
        Self::with_transport(
            base_url,
            RetryPolicy::from_backoff(max_retries, backoff_factor),
            CurlTransport::default(),
        )
    }
}

impl<T: RangeTransport> CcDownloader<T> {
    pub fn with_transport(base_url: &str, policy: RetryPolicy, transport: T) -> Result<Self, FetchError> {
        url::Url::parse(base_url).map_err(|source| FetchError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            policy,
            transport,
            sleep: Box::new(std::thread::sleep),
        })
    }

    /// Replace the backoff sleep (tests record delays instead of waiting).
    pub fn with_sleep(mut self, sleep: impl Fn(Duration) + 'static) -> Self {
        self.sleep = Box::new(sleep);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full URL for a path relative to the base URL.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl<T: RangeTransport> Downloader for CcDownloader<T> {
    fn download_and_unzip(
        &self,
        path: &str,
        start: u64,
        length: u64,
    ) -> Result<Vec<u8>, FetchError> {
        let range = ByteRange::new(start, length)?;
        let url = self.url_for(path);
        tracing::debug!("GET {} ({})", url, range.header_value());
        run_with_retry(
            &self.policy,
            || {
                let body = self.transport.get_range(&url, &range)?;
                gunzip(&body)
            },
            |d| (self.sleep)(d),
        )
    }
}

/// Decompress a (possibly multi-member) gzip buffer.
///
/// An empty buffer decodes to nothing. NUL padding between or after members
/// is skipped; any other trailing bytes must start a valid member.
pub fn gunzip(data: &[u8]) -> Result<Vec<u8>, FetchError> {
    let mut out = Vec::new();
    if data.is_empty() {
        return Ok(out);
    }
    let mut rest = data;
    loop {
        let mut member = GzDecoder::new(rest);
        member
            .read_to_end(&mut out)
            .map_err(FetchError::Decompress)?;
        rest = member.into_inner();
        let padding = rest.iter().take_while(|b| **b == 0).count();
        rest = &rest[padding..];
        if rest.is_empty() {
            return Ok(out);
        }
    }
}
