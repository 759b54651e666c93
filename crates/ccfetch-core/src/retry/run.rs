//! Retry loop: run a closure until success or policy says stop.

use super::classify;
use super::policy::{RetryDecision, RetryPolicy};
use crate::downloader::FetchError;
use std::time::Duration;

/// Runs `f` until it succeeds or the retry policy says to stop.
/// On retryable failure, logs a warning and calls `sleep` with the backoff
/// duration (production callers pass `std::thread::sleep`) before trying again.
pub fn run_with_retry<T, F, S>(
    policy: &RetryPolicy,
    mut f: F,
    mut sleep: S,
) -> Result<T, FetchError>
where
    F: FnMut() -> Result<T, FetchError>,
    S: FnMut(Duration),
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => {
                let kind = classify::classify(&e);
                tracing::warn!("download error (attempt {}/{}): {}", attempt, max_attempts, e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => return Err(e),
                    RetryDecision::RetryAfter(d) => {
                        tracing::warn!("retrying in {:.1} seconds", d.as_secs_f64());
                        sleep(d);
                        attempt += 1;
                    }
                }
            }
        }
    }
}
