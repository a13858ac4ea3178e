//! Options controlling grayscale rounding and parallel execution

/// Pixel count from which [`Parallelism::Auto`] switches to rayon.
pub const PARALLEL_MIN_PIXELS: usize = 256 * 256;

/// Rounding rule applied to the weighted luminance sum.
///
/// The choice matters only when `0.299*R + 0.587*G + 0.114*B` lands exactly
/// on a half, e.g. `(1, 123, 0)` gives `72.5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rounding {
    /// Banker's rounding: `72.5 -> 72`, `65.5 -> 66`.
    #[default]
    HalfToEven,
    /// `72.5 -> 73`.
    HalfAwayFromZero,
}

impl Rounding {
    /// Round `value` to the nearest integer using this rule
    pub fn round(self, value: f64) -> f64 {
        match self {
            Rounding::HalfToEven => value.round_ties_even(),
            Rounding::HalfAwayFromZero => value.round(),
        }
    }
}

/// Execution strategy for the per-pixel stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Parallelism {
    /// Always single-threaded.
    Sequential,
    /// Always use the rayon thread pool.
    Rayon,
    /// Use rayon once the image reaches [`PARALLEL_MIN_PIXELS`].
    #[default]
    Auto,
}

impl Parallelism {
    /// Whether an image of `pixel_count` pixels should be processed in parallel
    pub fn is_parallel(self, pixel_count: usize) -> bool {
        match self {
            Parallelism::Sequential => false,
            Parallelism::Rayon => true,
            Parallelism::Auto => pixel_count >= PARALLEL_MIN_PIXELS,
        }
    }
}

/// Options for [`crate::otsu_threshold_with`] and [`crate::analyze`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OtsuOptions {
    /// Rounding rule for grayscale conversion.
    pub rounding: Rounding,
    /// Execution strategy for grayscale conversion and histogram tallying.
    pub parallelism: Parallelism,
}

impl OtsuOptions {
    /// Replace the rounding rule
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Replace the execution strategy
    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }
}
