//! Stage functions of the Otsu pipeline
//!
//! - Grayscale conversion (RGB to rounded luminance)
//! - Histogram and probability distribution
//! - Class statistics and between-class variance per threshold
//! - Threshold selection and binarization

/// Threshold selection and binarization
pub mod binarization;
pub mod grayscale;
pub mod histogram;
pub mod variance;

pub use binarization::{select_threshold, threshold_binarize};
pub use grayscale::{luminance, rgb_to_grayscale, rgb_to_grayscale_parallel};
pub use histogram::{Histogram, LEVELS};
pub use variance::ClassStatistics;
