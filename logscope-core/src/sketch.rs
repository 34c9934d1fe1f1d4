use std::collections::BTreeMap;

/// Streaming approximate-quantile estimator over response sizes.
///
/// Values map onto exponentially-sized buckets keyed by
/// `k = ceil(ln(v) / ln(gamma))` with `gamma = (1+eps)/(1-eps)`, so a
/// quantile query answers within a `(1 ± eps)` factor of the exact value
/// while retaining `O(log(max/min))` counters, independent of how many
/// values were observed. Zero-sized responses get a dedicated bucket.
#[derive(Debug, Clone)]
pub struct QuantileSketch {
    gamma: f64,
    gamma_ln: f64,
    buckets: BTreeMap<i64, u64>,
    zero_count: u64,
    total: u64,
}

impl QuantileSketch {
    pub fn new(relative_accuracy: f64) -> Self {
        let gamma = (1.0 + relative_accuracy) / (1.0 - relative_accuracy);
        Self {
            gamma,
            gamma_ln: gamma.ln(),
            buckets: BTreeMap::new(),
            zero_count: 0,
            total: 0,
        }
    }

    pub fn accept(&mut self, value: u64) {
        self.total += 1;
        if value == 0 {
            self.zero_count += 1;
            return;
        }
        let key = ((value as f64).ln() / self.gamma_ln).ceil() as i64;
        *self.buckets.entry(key).or_insert(0) += 1;
    }

    /// Value at quantile `q`, or `None` when nothing was accepted.
    ///
    /// Scans buckets in ascending key order until the cumulative count
    /// reaches rank `ceil(q * N)` and returns that bucket's geometric
    /// midpoint `2 * gamma^k / (gamma + 1)`. Repeatable; does not mutate
    /// the sketch.
    pub fn quantile(&self, q: f64) -> Option<f64> {
        if self.total == 0 {
            return None;
        }

        let target = ((q * self.total as f64).ceil() as u64).max(1);

        let mut cumulative = self.zero_count;
        if cumulative >= target {
            return Some(0.0);
        }

        for (key, count) in &self.buckets {
            cumulative += count;
            if cumulative >= target {
                let representative = 2.0 * self.gamma.powi(*key as i32) / (self.gamma + 1.0);
                return Some(representative);
            }
        }

        // cumulative == total >= target, so the loop always returns.
        None
    }

    pub fn count(&self) -> u64 {
        self.total
    }

    /// Number of live buckets; grows with the value range, not with N.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len() + usize::from(self.zero_count > 0)
    }
}
