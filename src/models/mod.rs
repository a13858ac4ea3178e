/// Luminance grid produced by grayscale conversion
pub mod gray;
/// Packed bit grid holding the binarized result
pub mod mask;
/// Validated RGB input grid
pub mod rgb;

pub use gray::GrayGrid;
pub use mask::BinaryMask;
pub use rgb::RgbGrid;
