use std::time::Duration;

/// High-level classification of an error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect or low-speed abort).
    Timeout,
    /// Server asked us to slow down (429, 503).
    Throttled,
    /// Network-level failure (connection reset, DNS, etc.).
    Connection,
    /// Any other non-2xx HTTP status.
    Http(u16),
    /// Response arrived but its body could not be decoded. Never retried.
    Corrupt,
    /// Request setup or local failure. Never retried.
    Other,
}

impl ErrorKind {
    pub fn is_retryable(self) -> bool {
        match self {
            ErrorKind::Timeout
            | ErrorKind::Throttled
            | ErrorKind::Connection
            | ErrorKind::Http(_) => true,
            ErrorKind::Corrupt | ErrorKind::Other => false,
        }
    }
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Exponential backoff: after failed attempt `n`, wait
/// `base_delay * multiplier^(n-1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Delay after the first failed attempt.
    pub base_delay: Duration,
    /// Growth factor between consecutive delays.
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Policy from the downloader's constructor knobs: `max_retries`
    /// attempts and `backoff_factor` seconds of base delay.
    pub fn from_backoff(max_retries: u32, backoff_factor: f64) -> Self {
        Self {
            max_attempts: max_retries,
            base_delay: Duration::try_from_secs_f64(backoff_factor.max(0.0))
                .unwrap_or(Duration::MAX),
            ..Self::default()
        }
    }

    /// Backoff delay after failed attempt `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(63) as i32;
        let secs = self.base_delay.as_secs_f64() * self.multiplier.powi(exp);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }

    /// Decide what to do after failed attempt `attempt` (1-based) of the given kind.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if attempt >= self.max_attempts || !kind.is_retryable() {
            return RetryDecision::NoRetry;
        }
        RetryDecision::RetryAfter(self.delay_for(attempt))
    }
}
