//! Inference latency stats

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct InferenceStats {
    latency_sum_us: AtomicU64,
    count: AtomicU64,
}

impl InferenceStats {
    pub fn record(&self, elapsed: Duration) {
        self.latency_sum_us
            .fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Mean latency in milliseconds, 0 before the first call
    pub fn avg_latency_ms(&self) -> f32 {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.count();
        if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_latency() {
        let stats = InferenceStats::default();
        assert_eq!(stats.avg_latency_ms(), 0.0);

        stats.record(Duration::from_micros(1000));
        stats.record(Duration::from_micros(3000));

        assert_eq!(stats.count(), 2);
        assert!((stats.avg_latency_ms() - 2.0).abs() < 1e-6);
    }
}
