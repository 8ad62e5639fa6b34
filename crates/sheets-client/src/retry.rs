//! Retry policy and the generic execute-with-policy loop.
//!
//! The policy is a plain value object so the backoff schedule can be tested
//! without a network or a real clock; the loop itself is sequential and
//! shares nothing between calls.

use std::future::Future;
use std::time::Duration;

use log::warn;
use tokio::time::sleep;

use crate::errors::{ClientError, Result};

/// Backoff schedule for transient failures.
///
/// The defaults match the production tuning against the Apps Script
/// endpoint: 3 retries starting at 1s, doubling each time (1s, 2s, 4s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; total attempts = `max_retries + 1`.
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_retries: 3,
            initial_backoff: Duration::from_millis(1000),
            multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries; every failure surfaces immediately.
    pub fn none() -> Self {
        RetryPolicy {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// The waits taken between attempts, in order.
    pub fn backoff_delays(&self) -> impl Iterator<Item = Duration> {
        let base = self.initial_backoff;
        let multiplier = self.multiplier;
        (0..self.max_retries).map(move |i| base * multiplier.pow(i))
    }

    /// Cumulative wait before an always-failing operation gives up.
    pub fn total_backoff(&self) -> Duration {
        self.backoff_delays().sum()
    }
}

/// Run `op`, retrying transient failures per `policy`.
///
/// Success returns immediately with no further wait. Terminal errors (see
/// [`ClientError::is_retryable`]) are never retried. Once the schedule is
/// exhausted the final failure is propagated as-is.
pub async fn execute_with_policy<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut delays = policy.backoff_delays();
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() => match delays.next() {
                Some(delay) => {
                    warn!("request failed ({}), retrying in {}ms", err, delay.as_millis());
                    sleep(delay).await;
                }
                None => return Err(err),
            },
            Err(err) => return Err(err),
        }
    }
}
