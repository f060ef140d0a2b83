//! Safe vs Unsafe distribution over the log

use serde::Serialize;

use crate::logic::safety::{SafetyEvaluator, Verdict};
use crate::logic::telemetry::Reading;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSlice {
    pub status: Verdict,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafetyDistribution {
    pub safe_count: usize,
    pub unsafe_count: usize,
    pub total: usize,
    /// Non-empty slices, largest first
    pub slices: Vec<DistributionSlice>,
}

impl SafetyDistribution {
    pub fn percent(&self, verdict: Verdict) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let count = match verdict {
            Verdict::Safe => self.safe_count,
            Verdict::Unsafe => self.unsafe_count,
        };
        count as f64 * 100.0 / self.total as f64
    }
}

/// Classify every reading independently and count verdicts
pub fn safety_distribution<'a>(
    evaluator: &SafetyEvaluator,
    readings: impl IntoIterator<Item = &'a Reading>,
) -> SafetyDistribution {
    let (safe_count, unsafe_count) = readings.into_iter().fold((0, 0), |(safe, unsafe_), r| {
        match evaluator.evaluate(r) {
            Verdict::Safe => (safe + 1, unsafe_),
            Verdict::Unsafe => (safe, unsafe_ + 1),
        }
    });

    let mut distribution = SafetyDistribution {
        safe_count,
        unsafe_count,
        total: safe_count + unsafe_count,
        slices: Vec::new(),
    };

    let mut slices: Vec<DistributionSlice> = [(Verdict::Safe, safe_count), (Verdict::Unsafe, unsafe_count)]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(status, count)| DistributionSlice {
            status,
            count,
            percent: distribution.percent(status),
        })
        .collect();
    slices.sort_by(|a, b| b.count.cmp(&a.count));
    distribution.slices = slices;

    distribution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(rpm: f64) -> Reading {
        Reading {
            hours: 500.0,
            vibration: 0.5,
            temp: 85.0,
            oil_pressure: 3.0,
            fuel: 20.0,
            load: 60.0,
            rpm,
        }
    }

    #[test]
    fn test_counts_add_up() {
        let readings: Vec<Reading> = [900.0, 1500.0, 250.0, 1200.0, 300.0]
            .into_iter()
            .map(reading)
            .collect();
        let dist = safety_distribution(&SafetyEvaluator::default(), &readings);

        assert_eq!(dist.safe_count, 3);
        assert_eq!(dist.unsafe_count, 2);
        assert_eq!(dist.safe_count + dist.unsafe_count, dist.total);
        assert_eq!(dist.total, readings.len());
        assert!((dist.percent(Verdict::Safe) - 60.0).abs() < 1e-9);

        assert_eq!(dist.slices.len(), 2);
        assert_eq!(dist.slices[0].status, Verdict::Safe);
    }

    #[test]
    fn test_empty_log() {
        let dist = safety_distribution(&SafetyEvaluator::default(), &Vec::<Reading>::new());
        assert_eq!(dist.total, 0);
        assert!(dist.slices.is_empty());
        assert_eq!(dist.percent(Verdict::Unsafe), 0.0);
    }

    #[test]
    fn test_single_verdict_has_one_slice() {
        let readings = vec![reading(1500.0), reading(1600.0)];
        let dist = safety_distribution(&SafetyEvaluator::default(), &readings);
        assert_eq!(dist.slices.len(), 1);
        assert_eq!(dist.slices[0].status, Verdict::Unsafe);
        assert_eq!(dist.slices[0].percent, 100.0);
    }
}
