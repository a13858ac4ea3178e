//! Intensity histogram and the normalized probability distribution

use crate::error::OtsuError;
use crate::models::GrayGrid;
use rayon::prelude::*;

/// Number of distinct 8-bit intensity levels
pub const LEVELS: usize = 256;

/// Pixels tallied per rayon task before partial histograms are merged
const PARALLEL_CHUNK: usize = 16 * 1024;

/// Per-level pixel counts of a grayscale image.
/// The counts always sum to the number of pixels tallied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; LEVELS],
    total: u64,
}

impl Histogram {
    /// Tally every pixel of `gray` on the calling thread
    pub fn from_gray(gray: &GrayGrid) -> Self {
        let mut counts = [0u64; LEVELS];
        for &level in gray.as_slice() {
            counts[level as usize] += 1;
        }
        Self::from_counts(counts)
    }

    /// Tally in parallel: each task builds a partial histogram, partials are summed
    pub fn from_gray_parallel(gray: &GrayGrid) -> Self {
        let counts = gray
            .as_slice()
            .par_chunks(PARALLEL_CHUNK)
            .fold(
                || [0u64; LEVELS],
                |mut acc, chunk| {
                    for &level in chunk {
                        acc[level as usize] += 1;
                    }
                    acc
                },
            )
            .reduce(
                || [0u64; LEVELS],
                |mut a, b| {
                    for (x, y) in a.iter_mut().zip(b.iter()) {
                        *x += y;
                    }
                    a
                },
            );
        Self::from_counts(counts)
    }

    fn from_counts(counts: [u64; LEVELS]) -> Self {
        let total = counts.iter().sum();
        Self { counts, total }
    }

    /// Count per intensity level
    pub fn counts(&self) -> &[u64; LEVELS] {
        &self.counts
    }

    /// Total number of pixels tallied
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `p[i] = h[i] / total`. Fails with [`OtsuError::DegenerateInput`] on an empty histogram.
    pub fn probabilities(&self) -> Result<[f64; LEVELS], OtsuError> {
        if self.total == 0 {
            return Err(OtsuError::DegenerateInput);
        }
        let total = self.total as f64;
        let mut p = [0f64; LEVELS];
        for (pi, &count) in p.iter_mut().zip(self.counts.iter()) {
            *pi = count as f64 / total;
        }
        Ok(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_histogram_counts() {
        let gray = GrayGrid::from_rows(&[[0u8, 0, 7], [255, 7, 7]]).unwrap();
        let hist = Histogram::from_gray(&gray);
        assert_eq!(hist.counts()[0], 2);
        assert_eq!(hist.counts()[7], 3);
        assert_eq!(hist.counts()[255], 1);
        assert_eq!(hist.total(), 6);
        assert_eq!(hist.total(), hist.counts().iter().sum::<u64>());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let rows: Vec<Vec<u8>> = (0..300)
            .map(|y| (0..200).map(|x| ((x * 31 + y * 17) % 256) as u8).collect())
            .collect();
        let gray = GrayGrid::from_rows(&rows).unwrap();
        let parallel = Histogram::from_gray_parallel(&gray);
        assert_eq!(Histogram::from_gray(&gray), parallel);
        assert_eq!(parallel.total(), 300 * 200);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let gray = GrayGrid::from_rows(&[[3u8, 9, 9], [200, 3, 3], [1, 2, 250]]).unwrap();
        let p = Histogram::from_gray(&gray).probabilities().unwrap();
        assert_relative_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(p[3], 3.0 / 9.0);
    }

    #[test]
    fn test_empty_is_degenerate() {
        let rows: Vec<Vec<u8>> = Vec::new();
        let gray = GrayGrid::from_rows(&rows).unwrap();
        let hist = Histogram::from_gray_parallel(&gray);
        assert_eq!(hist.total(), 0);
        assert_eq!(hist.probabilities(), Err(OtsuError::DegenerateInput));
    }
}
