//! Single-attempt HTTP Range GET.
//!
//! A [`RangeTransport`] performs exactly one request and hands back the raw
//! response body; retrying and decompression live in the downloader.

use crate::downloader::FetchError;
use crate::range::ByteRange;
use std::time::Duration;

/// Fetches one byte range of a URL, returning the undecoded body.
pub trait RangeTransport {
    fn get_range(&self, url: &str, range: &ByteRange) -> Result<Vec<u8>, FetchError>;
}

impl<T: RangeTransport + ?Sized> RangeTransport for &T {
    fn get_range(&self, url: &str, range: &ByteRange) -> Result<Vec<u8>, FetchError> {
        (**self).get_range(url, range)
    }
}

/// Timeouts applied to each curl request.
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    pub connect_timeout: Duration,
    /// Abort when throughput stays under `low_speed_limit` bytes/s for this long.
    pub low_speed_time: Duration,
    pub low_speed_limit: u32,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            low_speed_time: Duration::from_secs(60),
            low_speed_limit: 1024,
        }
    }
}

impl RangeTransport for CurlTransport {
    fn get_range(&self, url: &str, range: &ByteRange) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::with_capacity(usize::try_from(range.length).unwrap_or(0).min(1 << 24));

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.low_speed_limit(self.low_speed_limit)?;
        easy.low_speed_time(self.low_speed_time)?;
        easy.range(&range.spec())?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        tracing::debug!(url, range = %range.header_value(), bytes = body.len(), "range GET complete");
        Ok(body)
    }
}
