use std::time::Duration;

use async_trait::async_trait;

/// Gate between consecutive provider calls issued by one batch.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Resolve once the next provider call is permitted.
    async fn wait(&self);
}

/// Sleeps for a fixed interval on every wait.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelayPacer {
    interval: Duration,
}

impl FixedDelayPacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[async_trait]
impl Pacer for FixedDelayPacer {
    async fn wait(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn waits_for_the_interval() {
        let pacer = FixedDelayPacer::new(Duration::from_millis(500));
        let start = Instant::now();
        pacer.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[test]
    fn zero_interval_returns_immediately() {
        let pacer = FixedDelayPacer::new(Duration::ZERO);
        tokio_test::block_on(pacer.wait());
        assert_eq!(pacer.interval(), Duration::ZERO);
    }
}
