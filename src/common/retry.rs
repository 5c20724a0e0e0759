use async_trait::async_trait;
use std::{fmt, sync, time};

/// Delay applied before resubmitting an unprocessed batch remainder.
///
/// The store client already applies its own retry policy to failed calls, so the
/// default is [`Immediate`]. Use [`ExponentialBackoff`] to give a throttled
/// table some room before the remainder is resubmitted.
#[async_trait]
pub trait RetryPolicy: fmt::Debug + Send + Sync {
    /// Wait before retry number `attempt` (starting at 1) of the same chunk.
    async fn wait(&self, attempt: usize);
}

/// Resubmit unprocessed remainders right away.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Immediate;

#[async_trait]
impl RetryPolicy for Immediate {
    async fn wait(&self, _attempt: usize) {}
}

/// Exponential backoff between remainder retries.
///
/// Retry `n` waits `initial * 2^(n - 1)`, capped at `max`.
///
/// ```rust
/// use dynamodb_batch::common::retry;
/// use std::time::Duration;
///
/// let backoff = retry::ExponentialBackoff {
///     initial: Duration::from_millis(50),
///     max: Duration::from_secs(1),
/// };
/// assert_eq!(backoff.delay(1), Duration::from_millis(50));
/// assert_eq!(backoff.delay(3), Duration::from_millis(200));
/// assert_eq!(backoff.delay(10), Duration::from_secs(1));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExponentialBackoff {
    /// Delay before the first retry.
    pub initial: time::Duration,
    /// Upper bound of any single delay.
    pub max: time::Duration,
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial: time::Duration::from_millis(50),
            max: time::Duration::from_secs(5),
        }
    }
}

impl ExponentialBackoff {
    /// Delay before retry number `attempt` (starting at 1).
    pub fn delay(&self, attempt: usize) -> time::Duration {
        let exponent = u32::try_from(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
        let factor = 2u32.checked_pow(exponent).unwrap_or(u32::MAX);
        self.initial.saturating_mul(factor).min(self.max)
    }
}

#[async_trait]
impl RetryPolicy for ExponentialBackoff {
    async fn wait(&self, attempt: usize) {
        tokio::time::sleep(self.delay(attempt)).await;
    }
}

/// Options for resubmitting unprocessed batch remainders.
#[derive(Clone, Debug)]
pub struct RetryOptions {
    /// Maximum number of remainder retries per chunk.
    ///
    /// `None` keeps resubmitting until the store reports nothing unprocessed.
    pub max_retries: Option<usize>,
    /// Delay applied before each retry.
    pub policy: sync::Arc<dyn RetryPolicy>,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            max_retries: None,
            policy: sync::Arc::new(Immediate),
        }
    }
}
