//! Retry policies and the per-request retry state machine.

use crate::error::HttpError;
use std::time::Duration;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// No retries.
    #[default]
    None,
    /// Full-jitter backoff tuned for `priceoverview`.
    PriceOverview,
    /// Strict-endpoint backoff for `pricehistory`: honours `Retry-After`,
    /// never waits less than the floor.
    PriceHistory,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// Resolve to a concrete config, `None` when retries are disabled.
    pub fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::PriceOverview => Some(RetryConfig::price_overview()),
            RetryPolicy::PriceHistory => Some(RetryConfig::price_history()),
            RetryPolicy::Custom(c) => Some(c.clone()),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Backoff cap for the first retry; doubles per attempt.
    pub base_delay: Duration,
    /// Upper bound on the exponential cap.
    pub max_delay: Duration,
    /// Use the upstream `Retry-After` header as a lower bound when present.
    pub respect_retry_after: bool,
    /// Lower bound on every wait.
    pub min_delay: Duration,
    /// Extra uniform jitter in `[0, extra_jitter)` added on top of the wait.
    pub extra_jitter: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::price_overview()
    }
}

impl RetryConfig {
    pub fn price_overview() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(800),
            max_delay: Duration::from_millis(5000),
            respect_retry_after: false,
            min_delay: Duration::ZERO,
            extra_jitter: Duration::ZERO,
        }
    }

    pub fn price_history() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(1500),
            max_delay: Duration::from_millis(12_000),
            respect_retry_after: true,
            min_delay: Duration::from_millis(2500),
            extra_jitter: Duration::from_millis(600),
        }
    }

    /// Exponential cap for a retry attempt (1-indexed):
    /// `min(max_delay, base_delay * 2^(attempt - 1))`.
    pub fn backoff_cap(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(31);
        let base = self.base_delay.as_millis() as u64;
        let uncapped = base.saturating_mul(1u64 << exp);
        Duration::from_millis(uncapped.min(self.max_delay.as_millis() as u64))
    }

    /// Full-jitter delay for a retry attempt (1-indexed): uniform in `[0, cap)`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let cap = self.backoff_cap(attempt).as_millis() as f64;
        Duration::from_millis((rand::random::<f64>() * cap).floor() as u64)
    }

    /// The actual wait before retry `attempt` after `error`.
    ///
    /// `max(retry_after, full_jitter, min_delay) + uniform[0, extra_jitter)`.
    pub fn wait_for(&self, attempt: u32, error: &HttpError) -> Duration {
        let jittered = self.delay_for_attempt(attempt);
        let retry_after = if self.respect_retry_after {
            error.retry_after_ms().map(Duration::from_millis)
        } else {
            None
        };

        let wait = jittered
            .max(retry_after.unwrap_or(Duration::ZERO))
            .max(self.min_delay);

        let extra_ms = self.extra_jitter.as_millis() as f64;
        wait + Duration::from_millis((rand::random::<f64>() * extra_ms).floor() as u64)
    }
}

/// Lifecycle of one logical request.
///
/// `Attempting { attempt: 0 }` is the initial request; each retry bumps the
/// counter, so `attempt` never exceeds `max_retries`.
#[derive(Debug)]
pub enum RetryState<T> {
    Attempting { attempt: u32 },
    Backoff {
        attempt: u32,
        delay: Duration,
        error: HttpError,
    },
    Succeeded(T),
    FailedTerminal(HttpError),
    Cancelled,
}

impl<T> RetryState<T> {
    pub fn start() -> Self {
        RetryState::Attempting { attempt: 0 }
    }

    /// Transition after attempt number `attempt` produced `result`.
    pub fn after_attempt(
        attempt: u32,
        result: Result<T, HttpError>,
        config: &RetryConfig,
    ) -> Self {
        match result {
            Ok(value) => RetryState::Succeeded(value),
            Err(HttpError::Cancelled) => RetryState::Cancelled,
            Err(error) if error.is_retryable() && attempt < config.max_retries => {
                let next = attempt + 1;
                RetryState::Backoff {
                    attempt: next,
                    delay: config.wait_for(next, &error),
                    error,
                }
            }
            Err(error) if error.is_retryable() && attempt > 0 => {
                RetryState::FailedTerminal(HttpError::MaxRetriesExceeded {
                    attempts: attempt + 1,
                    last_error: Box::new(error),
                })
            }
            Err(error) => RetryState::FailedTerminal(error),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RetryState::Succeeded(_) | RetryState::FailedTerminal(_) | RetryState::Cancelled
        )
    }
}
