use crate::error::InvalidInput;

/// Validated rectangular RGB image, stored row-major as `[R, G, B]` triples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbGrid {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 3]>,
}

impl RgbGrid {
    /// Build a grid from nested rows of channel tuples.
    ///
    /// Every row must have as many pixels as the first one, every pixel must
    /// have exactly three channels and every channel must lie in `0..=255`.
    /// Zero rows (or rows of zero length) are accepted here; the empty image
    /// is rejected later when the intensity distribution is built.
    pub fn from_rows<R, P>(rows: &[R]) -> Result<Self, InvalidInput>
    where
        R: AsRef<[P]>,
        P: AsRef<[i32]>,
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut pixels = Vec::with_capacity(width * height);

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(InvalidInput::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, pixel) in row.iter().enumerate() {
                pixels.push(channels(pixel.as_ref(), y, x)?);
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from an interleaved `RGBRGB...` byte buffer
    pub fn from_raw(width: usize, height: usize, rgb: &[u8]) -> Result<Self, InvalidInput> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(InvalidInput::DimensionOverflow { width, height })?;
        if rgb.len() != expected {
            return Err(InvalidInput::BufferLength {
                expected,
                found: rgb.len(),
            });
        }
        let pixels = rgb
            .chunks_exact(3)
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub(crate) fn from_pixels(width: usize, height: usize, pixels: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total pixel count (`width * height`)
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Pixels of row `y`
    pub fn row(&self, y: usize) -> &[[u8; 3]] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }
}

fn channels(pixel: &[i32], row: usize, column: usize) -> Result<[u8; 3], InvalidInput> {
    if pixel.len() != 3 {
        return Err(InvalidInput::ChannelCount {
            row,
            column,
            found: pixel.len(),
        });
    }
    let mut out = [0u8; 3];
    for (channel, (&value, slot)) in pixel.iter().zip(out.iter_mut()).enumerate() {
        *slot = u8::try_from(value).map_err(|_| InvalidInput::ChannelOutOfRange {
            row,
            column,
            channel,
            value,
        })?;
    }
    Ok(out)
}
