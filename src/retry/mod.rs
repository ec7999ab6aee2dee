use std::future::Future;
use std::time::Duration;

use log::warn;
use tokio::time::sleep;

use crate::config::QueryOptions;

/// Bounded retry with exponential backoff between attempts
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    retries: u32,
    base_delay: Duration,
    max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(retries: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            retries,
            base_delay,
            max_delay,
        }
    }

    pub fn from_options(options: &QueryOptions) -> Self {
        Self::new(options.retry, options.retry_base_delay, options.retry_max_delay)
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Delay before retry number `attempt` (0-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }

    /// Run `op` until it succeeds, `should_retry` rejects the error, or retries run out
    pub async fn run<T, E, F, Fut, P>(&self, mut op: F, should_retry: P) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        P: Fn(&E) -> bool,
        E: std::fmt::Display,
    {
        let mut attempt = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.retries && should_retry(&e) => {
                    let delay = self.delay_for(attempt);
                    warn!(
                        "Attempt {} of {} failed: {}. Retrying in {:?}",
                        attempt + 1,
                        self.retries + 1,
                        e,
                        delay
                    );
                    self.apply_delay(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn apply_delay(&self, delay: Duration) {
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}
