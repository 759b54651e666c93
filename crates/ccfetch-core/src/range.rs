//! Byte range of a remote resource and its HTTP `Range` header form.

use crate::downloader::FetchError;

/// A byte range `[start, start + length)` requested from a remote resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// Start offset (inclusive).
    pub start: u64,
    /// Number of bytes requested. Always non-zero.
    pub length: u64,
}

impl ByteRange {
    /// Builds a range, rejecting empty ranges and ranges whose last byte
    /// would not fit in a `u64`.
    pub fn new(start: u64, length: u64) -> Result<Self, FetchError> {
        if length == 0 {
            return Err(FetchError::InvalidRange { start, length });
        }
        if start.checked_add(length - 1).is_none() {
            return Err(FetchError::InvalidRange { start, length });
        }
        Ok(Self { start, length })
    }

    /// Offset of the last byte (inclusive).
    pub fn end_inclusive(&self) -> u64 {
        self.start + (self.length - 1)
    }

    /// Value for curl's range option: `start-end` (inclusive end).
    pub fn spec(&self) -> String {
        format!("{}-{}", self.start, self.end_inclusive())
    }

    /// HTTP Range header value: `bytes=start-end`.
    pub fn header_value(&self) -> String {
        format!("bytes={}", self.spec())
    }
}
