//! Convert RGB pixels to integer luminance
//! Y = round(0.299*R + 0.587*G + 0.114*B)
//!
//! The weighted sum is evaluated in `f64` in exactly that order so that
//! half-way values are detected consistently. The rounding rule is chosen
//! by the caller (see [`Rounding`]).

use crate::config::Rounding;
use crate::models::{GrayGrid, RgbGrid};
use rayon::prelude::*;

/// Luminance weights for R, G and B; they sum to 1.0
const COEF_R: f64 = 0.299;
const COEF_G: f64 = 0.587;
const COEF_B: f64 = 0.114;

/// Luminance of a single `[R, G, B]` pixel
#[inline]
pub fn luminance(pixel: [u8; 3], rounding: Rounding) -> u8 {
    let [r, g, b] = pixel;
    let y = COEF_R * r as f64 + COEF_G * g as f64 + COEF_B * b as f64;
    rounding.round(y).clamp(0.0, 255.0) as u8
}

/// Convert an RGB grid to grayscale on the calling thread
pub fn rgb_to_grayscale(image: &RgbGrid, rounding: Rounding) -> GrayGrid {
    let gray = image
        .pixels()
        .iter()
        .map(|&px| luminance(px, rounding))
        .collect();
    GrayGrid::from_parts(image.width(), image.height(), gray)
}

/// Convert an RGB grid to grayscale using parallel processing
/// Processes rows in parallel; the result is identical to [`rgb_to_grayscale`]
pub fn rgb_to_grayscale_parallel(image: &RgbGrid, rounding: Rounding) -> GrayGrid {
    let width = image.width();
    let mut gray = vec![0u8; image.pixel_count()];

    // par_chunks_mut panics on a zero chunk size
    if width > 0 {
        gray.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
            for (out, &px) in row.iter_mut().zip(image.row(y)) {
                *out = luminance(px, rounding);
            }
        });
    }

    GrayGrid::from_parts(width, image.height(), gray)
}
