//! Retry behaviour for chart fetches.
//!
//! A fetch is attempted once unless the dashboard is built with
//! [`RetryPolicy::Backoff`].

use crate::error::HttpError;

use rand::Rng;
use std::time::Duration;

/// Whether a failed chart fetch is attempted again.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RetryPolicy {
    #[default]
    Once,
    Backoff(RetryConfig),
}

impl RetryPolicy {
    /// Backoff on gateway errors, 429 and connection failures.
    pub fn transient() -> Self {
        Self::Backoff(RetryConfig::default())
    }

    pub(crate) fn config(&self) -> Option<&RetryConfig> {
        match self {
            Self::Once => None,
            Self::Backoff(config) => Some(config),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Extra attempts after the first.
    pub retries: u32,
    /// Wait before the first retry.
    pub base_delay: Duration,
    /// Upper bound on any wait, including a server's `Retry-After`.
    pub max_delay: Duration,
    /// Growth of the wait between consecutive retries.
    pub multiplier: f64,
    /// Random spread as a fraction of each wait; `0.0` disables it.
    pub jitter: f64,
    /// Response statuses worth another attempt.
    pub retry_on: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            multiplier: 2.0,
            jitter: 0.25,
            retry_on: vec![429, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// Backoff wait before retry number `retry + 1`.
    pub fn backoff(&self, retry: u32) -> Duration {
        let cap = self.max_delay.as_secs_f64() * 1000.0;
        let mut ms = (self.base_delay.as_secs_f64() * 1000.0 * self.multiplier.powi(retry as i32))
            .min(cap);
        if self.jitter > 0.0 {
            let spread = ms * self.jitter;
            ms += rand::thread_rng().gen_range(-spread..=spread);
        }
        Duration::from_millis(ms.max(0.0).round() as u64)
    }

    /// Wait before the next attempt after `err`, or `None` to give up.
    pub(crate) fn next_delay(&self, err: &HttpError, retry: u32) -> Option<Duration> {
        if retry >= self.retries {
            return None;
        }
        match err {
            HttpError::Status { status, .. } if self.retry_on.contains(status) => {
                Some(self.backoff(retry))
            }
            HttpError::RateLimited { retry_after } if self.retry_on.contains(&429) => Some(
                retry_after.map_or_else(|| self.backoff(retry), |hint| hint.min(self.max_delay)),
            ),
            HttpError::Transport(e) if e.is_connect() || e.is_timeout() => {
                Some(self.backoff(retry))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steady(base_ms: u64, max_ms: u64, multiplier: f64) -> RetryConfig {
        RetryConfig {
            retries: 2,
            base_delay: Duration::from_millis(base_ms),
            max_delay: Duration::from_millis(max_ms),
            multiplier,
            jitter: 0.0,
            retry_on: vec![503],
        }
    }

    fn status(code: u16) -> HttpError {
        HttpError::Status {
            status: code,
            body: String::new(),
        }
    }

    #[test]
    fn test_default_policy_is_one_shot() {
        assert_eq!(RetryPolicy::default(), RetryPolicy::Once);
        assert!(RetryPolicy::default().config().is_none());
    }

    #[test]
    fn test_transient_statuses() {
        let config = RetryPolicy::transient().config().cloned().unwrap();
        assert_eq!(config.retry_on, vec![429, 502, 503, 504]);
        assert!(config.next_delay(&status(500), 0).is_none());
        assert!(config.next_delay(&status(502), 0).is_some());
    }

    #[test]
    fn test_backoff_grows_then_caps() {
        let config = steady(100, 500, 2.0);
        assert_eq!(config.backoff(0), Duration::from_millis(100));
        assert_eq!(config.backoff(1), Duration::from_millis(200));
        assert_eq!(config.backoff(2), Duration::from_millis(400));
        assert_eq!(config.backoff(3), Duration::from_millis(500));
    }

    #[test]
    fn test_jitter_spread() {
        let config = RetryConfig {
            jitter: 0.25,
            ..steady(400, 10_000, 1.0)
        };
        for _ in 0..50 {
            let ms = config.backoff(0).as_millis();
            assert!((300..=500).contains(&ms), "delay {ms} out of range");
        }
    }

    #[test]
    fn test_gives_up_after_budget() {
        let config = steady(10, 100, 2.0);
        assert!(config.next_delay(&status(503), 0).is_some());
        assert!(config.next_delay(&status(503), 1).is_some());
        assert!(config.next_delay(&status(503), 2).is_none());
    }

    #[test]
    fn test_unlisted_status_not_retried() {
        assert!(steady(10, 100, 2.0).next_delay(&status(404), 0).is_none());
    }

    #[test]
    fn test_retry_after_hint_wins_and_is_capped() {
        let config = RetryConfig {
            retry_on: vec![429],
            ..steady(10, 1_000, 2.0)
        };
        let hinted = |secs| HttpError::RateLimited {
            retry_after: Some(Duration::from_secs(secs)),
        };
        assert_eq!(config.next_delay(&hinted(0), 0), Some(Duration::ZERO));
        assert_eq!(config.next_delay(&hinted(60), 0), Some(Duration::from_secs(1)));
        assert_eq!(
            config.next_delay(&HttpError::RateLimited { retry_after: None }, 1),
            Some(Duration::from_millis(20))
        );
    }

    #[test]
    fn test_rate_limit_needs_429_listed() {
        let err = HttpError::RateLimited { retry_after: None };
        assert!(steady(10, 100, 2.0).next_delay(&err, 0).is_none());
    }
}
