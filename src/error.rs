//! Error types for the thresholding pipeline

/// Reasons an input grid is rejected before grayscale conversion.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// A row does not have the same number of pixels as the first row.
    #[error("row {row} has {found} pixels, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Pixel count of the first row.
        expected: usize,
        /// Pixel count of the offending row.
        found: usize,
    },
    /// A pixel does not carry exactly three channels.
    #[error("pixel ({row}, {column}) has {found} channels, expected 3")]
    ChannelCount {
        /// Row of the pixel.
        row: usize,
        /// Column of the pixel.
        column: usize,
        /// Number of channels found.
        found: usize,
    },
    /// A channel intensity lies outside `0..=255`.
    #[error("pixel ({row}, {column}) channel {channel} is {value}, outside 0..=255")]
    ChannelOutOfRange {
        /// Row of the pixel.
        row: usize,
        /// Column of the pixel.
        column: usize,
        /// Channel index (0 = R, 1 = G, 2 = B).
        channel: usize,
        /// Offending value.
        value: i32,
    },
    /// Declared dimensions do not fit the target size type.
    #[error("dimensions {width}x{height} overflow")]
    DimensionOverflow {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
    },
    /// A raw interleaved buffer does not match `width * height * channels`.
    #[error("buffer holds {found} bytes, expected {expected}")]
    BufferLength {
        /// Bytes implied by the declared dimensions.
        expected: usize,
        /// Bytes actually supplied.
        found: usize,
    },
}

/// Errors surfaced by [`crate::otsu_threshold`] and the stage functions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OtsuError {
    /// Malformed geometry or out-of-domain pixel values.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// The image has no pixels, so the intensity distribution is undefined.
    #[error("image contains no pixels")]
    DegenerateInput,
}
