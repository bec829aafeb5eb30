// src/server/latency.rs

use rand::Rng;
use tokio::time::{sleep, Duration};

/// Artificial delay applied before a prediction response is sent.
/// Lives only in the transport; the engine itself never waits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub base: Duration,
    pub jitter: Duration,
}

impl SimulatedLatency {
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    pub fn is_disabled(&self) -> bool {
        self.base.is_zero() && self.jitter.is_zero()
    }

    /// Picks a delay in `[base, base + jitter]`.
    pub fn sample(&self) -> Duration {
        if self.jitter.is_zero() {
            return self.base;
        }
        let jitter_ms = self.jitter.as_millis() as u64;
        let extra = rand::rng().random_range(0..=jitter_ms);
        self.base + Duration::from_millis(extra)
    }

    pub async fn wait(&self) {
        if self.is_disabled() {
            return;
        }
        sleep(self.sample()).await;
    }
}
