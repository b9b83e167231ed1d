use morpho_image::ImageError;

use super::MAX_RADIUS;
use crate::parallel::ParallelError;

/// Errors related to morphological operations.
///
/// Every variant is raised while validating the arguments, before any output
/// pixel is written.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MorphologyError {
    /// A radius lies outside `[1, MAX_RADIUS]`.
    #[error("{axis} radius {radius} out of range [1, {max}]", max = MAX_RADIUS)]
    InvalidRadius {
        /// Which radius was rejected, `"horizontal"` or `"vertical"`.
        axis: &'static str,
        /// The rejected value.
        radius: u16,
    },

    /// The destination size differs from the processed area.
    #[error("destination size {dst} does not match source size {src}")]
    SizeMismatch {
        /// Size of the processed source area.
        src: morpho_image::ImageSize,
        /// Size of the destination image.
        dst: morpho_image::ImageSize,
    },

    /// The input image has zero width or height.
    #[error("input image is empty")]
    EmptyImage,

    /// The input holds a NaN or infinite sample.
    #[error("non-finite sample at ({x}, {y})")]
    NonFiniteSample {
        /// Column of the sample, relative to the processed area.
        x: usize,
        /// Row of the sample, relative to the processed area.
        y: usize,
    },

    /// An image or region error.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// A scheduling error.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
