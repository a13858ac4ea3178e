use super::histogram::LEVELS;
use crate::models::{BinaryMask, GrayGrid};

/// Pick the threshold with maximal between-class variance.
/// Ties go to the smallest level, so a flat (all-zero) curve selects 0.
/// Returns the threshold together with its variance.
pub fn select_threshold(variance: &[f64; LEVELS]) -> (u8, f64) {
    let mut optimal_threshold = 0usize;
    let mut max_variance = variance[0];

    for (threshold, &v) in variance.iter().enumerate().skip(1) {
        if v > max_variance {
            max_variance = v;
            optimal_threshold = threshold;
        }
    }

    (optimal_threshold as u8, max_variance)
}

/// Simple global threshold binarization
/// Pixels strictly brighter than `threshold` are set
pub fn threshold_binarize(gray: &GrayGrid, threshold: u8) -> BinaryMask {
    let (width, height) = (gray.width(), gray.height());
    let mut binary = BinaryMask::new(width, height);
    let data = gray.as_slice();

    for y in 0..height {
        for x in 0..width {
            binary.set(x, y, data[y * width + x] > threshold);
        }
    }

    binary
}
