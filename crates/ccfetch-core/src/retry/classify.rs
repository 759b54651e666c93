//! Classify HTTP status and curl errors into retry policy error kinds.

use super::policy::ErrorKind;
use crate::downloader::FetchError;

/// Classify a non-2xx HTTP status. Every status maps to a retryable kind:
/// archive mirrors answer transient overload with assorted 4xx/5xx codes.
pub fn classify_http_status(code: u32) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        _ => ErrorKind::Http(u16::try_from(code).unwrap_or(u16::MAX)),
    }
}

/// Classify a curl error for retry decisions.
///
/// Setup failures (bad URL, unsupported option) are `Other`; everything that
/// happens on the wire counts as a connection problem.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_url_malformed()
        || e.is_unsupported_protocol()
        || e.is_bad_function_argument()
        || e.is_unknown_option()
        || e.is_write_error()
    {
        return ErrorKind::Other;
    }
    ErrorKind::Connection
}

/// Classify a fetch error into an ErrorKind.
pub fn classify(e: &FetchError) -> ErrorKind {
    match e {
        FetchError::Curl(ce) => classify_curl_error(ce),
        FetchError::Http(code) => classify_http_status(*code),
        FetchError::Decompress(_) => ErrorKind::Corrupt,
        FetchError::InvalidRange { .. } | FetchError::InvalidUrl { .. } => ErrorKind::Other,
    }
}
