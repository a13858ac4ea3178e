//! RustOtsu - global Otsu thresholding for RGB pixel grids
//!
//! Converts an in-memory RGB image to rounded luminance, builds the
//! 256-level intensity histogram, picks the threshold that maximizes the
//! between-class variance of the dark and light populations, and returns a
//! binary grid where `1` marks pixels strictly brighter than that threshold.
//!
//! ```
//! let image = vec![
//!     vec![[0, 0, 0], [0, 0, 0]],
//!     vec![[255, 255, 255], [255, 255, 255]],
//! ];
//! let binary = rust_otsu::otsu_threshold(&image).unwrap();
//! assert_eq!(binary, vec![vec![0, 0], vec![1, 1]]);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Grayscale rounding and execution options
pub mod config;
/// Error taxonomy (invalid vs. degenerate input)
pub mod error;
/// Core data structures (RgbGrid, GrayGrid, BinaryMask)
pub mod models;
/// Stage orchestration and the full report
pub mod pipeline;
/// Interop with `image` buffers and summary statistics
pub mod tools;
/// Stage functions (grayscale, histogram, variance, binarization)
pub mod utils;

pub use config::{OtsuOptions, Parallelism, Rounding};
pub use error::{InvalidInput, OtsuError};
pub use models::{BinaryMask, GrayGrid, RgbGrid};
pub use pipeline::{OtsuReport, analyze, analyze_gray};

/// Binarize an RGB image with Otsu's method using default options
///
/// # Arguments
/// * `image` - Rows of pixels, each pixel `[R, G, B]` with channels in `0..=255`
///
/// # Returns
/// Grid of the same shape holding `1` where the luminance is above the
/// selected threshold and `0` elsewhere.
///
/// # Errors
/// * [`OtsuError::InvalidInput`] - ragged rows, wrong channel count, or a
///   channel outside `0..=255`
/// * [`OtsuError::DegenerateInput`] - the image has no pixels
pub fn otsu_threshold<R, P>(image: &[R]) -> Result<Vec<Vec<u8>>, OtsuError>
where
    R: AsRef<[P]>,
    P: AsRef<[i32]>,
{
    otsu_threshold_with(image, &OtsuOptions::default())
}

/// Same as [`otsu_threshold`] with explicit rounding and parallelism options
pub fn otsu_threshold_with<R, P>(
    image: &[R],
    options: &OtsuOptions,
) -> Result<Vec<Vec<u8>>, OtsuError>
where
    R: AsRef<[P]>,
    P: AsRef<[i32]>,
{
    let rgb = RgbGrid::from_rows(image)?;
    let report = analyze(&rgb, options)?;
    Ok(report.mask.to_rows())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_white_rows() {
        let image = [
            [[0, 0, 0], [0, 0, 0]],
            [[255, 255, 255], [255, 255, 255]],
        ];
        assert_eq!(otsu_threshold(&image).unwrap(), vec![vec![0, 0], vec![1, 1]]);
    }

    #[test]
    fn test_errors_propagate() {
        assert!(matches!(
            otsu_threshold(&[[[300, 0, 0]]]),
            Err(OtsuError::InvalidInput(InvalidInput::ChannelOutOfRange { .. }))
        ));
        let empty: Vec<Vec<[i32; 3]>> = Vec::new();
        assert_eq!(otsu_threshold(&empty), Err(OtsuError::DegenerateInput));
    }
}
