//! Retry and backoff policy.
//!
//! Failures are classified into an [`ErrorKind`] and the [`RetryPolicy`]
//! decides whether and how long to wait before the next attempt. Network and
//! HTTP failures are retried; a body that fails to decompress is not, since
//! the same bytes would come back again.

mod classify;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
