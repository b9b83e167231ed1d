#![deny(missing_docs)]
//! Image containers and regions for morphological image processing

/// image representation for image processing purposes.
pub mod image;

/// rectangular regions inside an image.
pub mod region;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::region::Region;
