//! Request pacing and retry policy for the quote fetcher.

use std::time::Duration;

/// Fixed-interval request pacer.
///
/// The first `pace()` returns immediately; every later one sleeps the full
/// interval, whatever happened to the previous request. A zero interval
/// never sleeps.
#[derive(Debug, Clone)]
pub struct RequestPacer {
    interval: Duration,
    started: bool,
}

impl RequestPacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            started: false,
        }
    }

    /// Pacer that never waits
    pub fn unpaced() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Wait for the next request slot
    pub async fn pace(&mut self) {
        if self.started && !self.interval.is_zero() {
            tracing::debug!("Rate limit pause: {:?}", self.interval);
            tokio::time::sleep(self.interval).await;
        }
        self.started = true;
    }
}

/// Per-symbol retry budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, first try included. Always at least 1.
    pub max_attempts: u32,
    /// Pause after a failed attempt that has a retry left
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            backoff: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// `max_attempts` tries with no pause in between
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO)
    }

    pub fn has_retry_after(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_first_pace_is_free() {
        let mut pacer = RequestPacer::new(Duration::from_secs(15));
        let start = Instant::now();
        pacer.pace().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_later_paces_wait_full_interval() {
        let mut pacer = RequestPacer::new(Duration::from_secs(15));
        let start = Instant::now();
        pacer.pace().await;
        pacer.pace().await;
        pacer.pace().await;
        assert_eq!(start.elapsed(), Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unpaced_never_waits() {
        let mut pacer = RequestPacer::unpaced();
        let start = Instant::now();
        for _ in 0..5 {
            pacer.pace().await;
        }
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_default_retry_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 2);
        assert_eq!(policy.backoff, Duration::from_secs(30));
        assert!(policy.has_retry_after(1));
        assert!(!policy.has_retry_after(2));
    }

    #[test]
    fn test_zero_attempts_clamped_to_one() {
        let policy = RetryPolicy::new(0, Duration::ZERO);
        assert_eq!(policy.max_attempts, 1);
        assert!(!policy.has_retry_after(1));
    }
}
