//! Four-stage thresholding pipeline: grayscale, histogram, variance, binarize

use crate::config::OtsuOptions;
use crate::error::OtsuError;
use crate::models::{BinaryMask, GrayGrid, RgbGrid};
use crate::utils::binarization::{select_threshold, threshold_binarize};
use crate::utils::grayscale::{rgb_to_grayscale, rgb_to_grayscale_parallel};
use crate::utils::histogram::Histogram;
use crate::utils::variance::ClassStatistics;
use log::{debug, trace};

/// Everything computed by one pipeline run
#[derive(Debug, Clone)]
pub struct OtsuReport {
    /// Selected threshold; pixels strictly above it are foreground.
    pub threshold: u8,
    /// Between-class variance at the selected threshold.
    pub max_variance: f64,
    /// Luminance histogram the threshold was selected from.
    pub histogram: Histogram,
    /// Binarized image, same dimensions as the input.
    pub mask: BinaryMask,
}

/// Run the whole pipeline on a validated RGB grid
pub fn analyze(image: &RgbGrid, options: &OtsuOptions) -> Result<OtsuReport, OtsuError> {
    let gray = if options.parallelism.is_parallel(image.pixel_count()) {
        rgb_to_grayscale_parallel(image, options.rounding)
    } else {
        rgb_to_grayscale(image, options.rounding)
    };
    trace!(
        "grayscale: {}x{} ({:?} rounding)",
        gray.width(),
        gray.height(),
        options.rounding
    );
    analyze_gray(&gray, options)
}

/// Run histogram, variance and binarization stages on luminance data
pub fn analyze_gray(gray: &GrayGrid, options: &OtsuOptions) -> Result<OtsuReport, OtsuError> {
    let pixel_count = gray.as_slice().len();
    let histogram = if options.parallelism.is_parallel(pixel_count) {
        Histogram::from_gray_parallel(gray)
    } else {
        Histogram::from_gray(gray)
    };
    trace!("histogram: {} pixels tallied", histogram.total());

    let probabilities = histogram.probabilities()?;
    let stats = ClassStatistics::from_probabilities(&probabilities);
    let (threshold, max_variance) = select_threshold(stats.between_class_variance());
    debug!(
        "otsu threshold {} (between-class variance {:.4}) for {}x{} image",
        threshold,
        max_variance,
        gray.width(),
        gray.height()
    );

    let mask = threshold_binarize(gray, threshold);
    Ok(OtsuReport {
        threshold,
        max_variance,
        histogram,
        mask,
    })
}
