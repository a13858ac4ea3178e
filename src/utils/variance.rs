//! Per-threshold class statistics and between-class variance
//!
//! For a candidate threshold `t`, class 0 holds levels `0..t` and class 1
//! holds levels `t..256`. Weights and first moments are accumulated as
//! running prefix/suffix sums, so all 256 candidates cost one pass each.

use super::histogram::LEVELS;

/// Weights, means and between-class variance for every threshold `0..=255`
#[derive(Debug, Clone)]
pub struct ClassStatistics {
    w0: [f64; LEVELS],
    w1: [f64; LEVELS],
    u0: [f64; LEVELS],
    u1: [f64; LEVELS],
    variance: [f64; LEVELS],
}

impl ClassStatistics {
    /// Compute statistics from a normalized intensity distribution
    pub fn from_probabilities(p: &[f64; LEVELS]) -> Self {
        let mut w0 = [0f64; LEVELS];
        let mut m0 = [0f64; LEVELS];
        for t in 1..LEVELS {
            w0[t] = w0[t - 1] + p[t - 1];
            m0[t] = m0[t - 1] + (t - 1) as f64 * p[t - 1];
        }

        let mut w1 = [0f64; LEVELS];
        let mut m1 = [0f64; LEVELS];
        w1[LEVELS - 1] = p[LEVELS - 1];
        m1[LEVELS - 1] = (LEVELS - 1) as f64 * p[LEVELS - 1];
        for t in (0..LEVELS - 1).rev() {
            w1[t] = w1[t + 1] + p[t];
            m1[t] = m1[t + 1] + t as f64 * p[t];
        }

        let mut u0 = [0f64; LEVELS];
        let mut u1 = [0f64; LEVELS];
        let mut variance = [0f64; LEVELS];
        for t in 0..LEVELS {
            // Empty class: mean is pinned to 0 instead of 0/0
            u0[t] = if w0[t] != 0.0 { m0[t] / w0[t] } else { 0.0 };
            u1[t] = if w1[t] != 0.0 { m1[t] / w1[t] } else { 0.0 };
            variance[t] = w0[t] * w1[t] * (u0[t] - u1[t]).powi(2);
        }

        Self {
            w0,
            w1,
            u0,
            u1,
            variance,
        }
    }

    /// Probability mass strictly below each threshold
    pub fn w0(&self) -> &[f64; LEVELS] {
        &self.w0
    }

    /// Probability mass at or above each threshold
    pub fn w1(&self) -> &[f64; LEVELS] {
        &self.w1
    }

    /// Mean level of the lower class (0 when the class is empty)
    pub fn u0(&self) -> &[f64; LEVELS] {
        &self.u0
    }

    /// Mean level of the upper class (0 when the class is empty)
    pub fn u1(&self) -> &[f64; LEVELS] {
        &self.u1
    }

    /// `d[t] = w0[t] * w1[t] * (u0[t] - u1[t])^2`
    pub fn between_class_variance(&self) -> &[f64; LEVELS] {
        &self.variance
    }
}
