use crate::ImageSize;

/// A rectangular area of an image, given by its top-left corner and size.
///
/// # Examples
///
/// ```
/// use morpho_image::{ImageSize, Region};
///
/// let region = Region::new(2, 1, 4, 3);
/// let image_size = ImageSize { width: 8, height: 4 };
///
/// assert!(region.fits_in(image_size));
/// assert_eq!(region.size(), ImageSize { width: 4, height: 3 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// x-coordinate of the top-left corner.
    pub x: usize,
    /// y-coordinate of the top-left corner.
    pub y: usize,
    /// Width of the region in pixels.
    pub width: usize,
    /// Height of the region in pixels.
    pub height: usize,
}

impl Region {
    /// Create a region from its origin and size.
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The region covering a whole image of the given size.
    pub fn full(size: ImageSize) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Size of the region.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Whether the region lies entirely inside an image of the given size.
    pub fn fits_in(&self, size: ImageSize) -> bool {
        self.x
            .checked_add(self.width)
            .is_some_and(|right| right <= size.width)
            && self
                .y
                .checked_add(self.height)
                .is_some_and(|bottom| bottom <= size.height)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Region {{ x: {}, y: {}, width: {}, height: {} }}",
            self.x, self.y, self.width, self.height
        )
    }
}

impl From<ImageSize> for Region {
    fn from(size: ImageSize) -> Self {
        Region::full(size)
    }
}
