//! Helpers for callers that hold `image` crate buffers, plus summary statistics.
//! Everything here is in-memory; decoding and encoding files is left to the caller.

use crate::error::InvalidInput;
use crate::models::{BinaryMask, GrayGrid, RgbGrid};

/// `image` buffers address pixels with `u32` coordinates
fn luma_dimensions(width: usize, height: usize) -> Result<(u32, u32), InvalidInput> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(InvalidInput::DimensionOverflow { width, height }),
    }
}

/// Copy an `image::RgbImage` into a validated [`RgbGrid`].
pub fn rgb_grid_from_image(image: &image::RgbImage) -> RgbGrid {
    let (width, height) = image.dimensions();
    let pixels = image.pixels().map(|px| px.0).collect();
    RgbGrid::from_pixels(width as usize, height as usize, pixels)
}

/// Render a mask as 8-bit luma: foreground 255, background 0.
/// Fails when a dimension exceeds `u32::MAX`.
pub fn mask_to_luma(mask: &BinaryMask) -> Result<image::GrayImage, InvalidInput> {
    let (width, height) = luma_dimensions(mask.width(), mask.height())?;
    Ok(image::GrayImage::from_fn(width, height, |x, y| {
        let on = mask.get(x as usize, y as usize);
        image::Luma([if on { 255 } else { 0 }])
    }))
}

/// Copy a luminance grid into an `image::GrayImage`.
/// Fails when a dimension exceeds `u32::MAX`.
pub fn gray_to_luma(gray: &GrayGrid) -> Result<image::GrayImage, InvalidInput> {
    let (width, height) = luma_dimensions(gray.width(), gray.height())?;
    Ok(image::GrayImage::from_fn(width, height, |x, y| {
        image::Luma([gray.get(x as usize, y as usize).unwrap_or(0)])
    }))
}

/// Summary statistics for grayscale data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayStats {
    /// Minimum grayscale value.
    pub min: u8,
    /// Maximum grayscale value.
    pub max: u8,
    /// Average grayscale value (truncated).
    pub avg: u8,
}

/// Summary statistics for a binary mask.
#[derive(Debug, Clone, Copy)]
pub struct MaskStats {
    /// Count of pixels above the threshold.
    pub foreground_pixels: usize,
    /// Total pixels in the mask.
    pub total_pixels: usize,
    /// Ratio of foreground pixels to total pixels.
    pub foreground_ratio: f64,
}

/// Compute min/max/avg for grayscale values; `None` for an empty grid.
pub fn grayscale_stats(gray: &GrayGrid) -> Option<GrayStats> {
    let data = gray.as_slice();
    if data.is_empty() {
        return None;
    }
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut sum: u64 = 0;
    for &v in data {
        min = min.min(v);
        max = max.max(v);
        sum += v as u64;
    }
    let avg = (sum / data.len() as u64) as u8;
    Some(GrayStats { min, max, avg })
}

/// Compute foreground pixel stats for a mask.
pub fn mask_stats(mask: &BinaryMask) -> MaskStats {
    let foreground = mask.count_ones();
    let total = mask.width() * mask.height();
    let ratio = if total == 0 {
        0.0
    } else {
        foreground as f64 / total as f64
    };
    MaskStats {
        foreground_pixels: foreground,
        total_pixels: total,
        foreground_ratio: ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_stats() {
        let gray = GrayGrid::from_rows(&[[10u8, 20], [30, 41]]).unwrap();
        assert_eq!(
            grayscale_stats(&gray),
            Some(GrayStats {
                min: 10,
                max: 41,
                avg: 25
            })
        );
    }

    #[test]
    fn test_grayscale_stats_empty() {
        let rows: Vec<Vec<u8>> = vec![Vec::new(); 3];
        let gray = GrayGrid::from_rows(&rows).unwrap();
        assert_eq!(grayscale_stats(&gray), None);
    }

    #[test]
    fn test_mask_stats() {
        let mut mask = BinaryMask::new(2, 2);
        mask.set(1, 1, true);
        let stats = mask_stats(&mask);
        assert_eq!(stats.foreground_pixels, 1);
        assert_eq!(stats.total_pixels, 4);
        assert!((stats.foreground_ratio - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_image_round_trip_layout() {
        let img = image::RgbImage::from_fn(3, 2, |x, y| image::Rgb([x as u8, y as u8, 7]));
        let grid = rgb_grid_from_image(&img);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.row(1)[2], [2, 1, 7]);
    }

    #[test]
    fn test_mask_to_luma() {
        let mut mask = BinaryMask::new(2, 1);
        mask.set(0, 0, true);
        let luma = mask_to_luma(&mask).unwrap();
        assert_eq!(luma.get_pixel(0, 0).0, [255]);
        assert_eq!(luma.get_pixel(1, 0).0, [0]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_luma_rejects_wide_grids() {
        let wide = u32::MAX as usize + 1;
        // Zero rows keep both buffers empty
        let mask = BinaryMask::new(wide, 0);
        assert!(matches!(
            mask_to_luma(&mask),
            Err(InvalidInput::DimensionOverflow { width, height: 0 }) if width == wide
        ));
        let gray = GrayGrid::from_parts(wide, 0, Vec::new());
        assert!(matches!(
            gray_to_luma(&gray),
            Err(InvalidInput::DimensionOverflow { .. })
        ));
    }
}
