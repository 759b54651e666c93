//! Download error type, classified by the retry module.

use thiserror::Error;

/// Error returned by a range download.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Zero-length range, or one whose last byte overflows `u64`.
    #[error("invalid byte range: start {start}, length {length}")]
    InvalidRange { start: u64, length: u64 },
    /// Base URL could not be parsed.
    #[error("invalid base URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Curl reported an error (timeout, connection, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Response body is not a valid gzip stream. Not retried.
    #[error("gzip decompression failed")]
    Decompress(#[source] std::io::Error),
}
