use morpho_image::{Image, Region};

/// How samples outside the processed area are synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbyssPolicy {
    /// Replicate the nearest edge pixel, independently per axis.
    EdgeLock,

    /// Every position outside the area reads as `0`.
    #[default]
    Zero,
}

impl AbyssPolicy {
    /// The constant read outside the area, if the policy has one.
    pub fn constant(&self) -> Option<f32> {
        match self {
            AbyssPolicy::EdgeLock => None,
            AbyssPolicy::Zero => Some(0.0),
        }
    }
}

impl From<bool> for AbyssPolicy {
    fn from(edge_lock: bool) -> Self {
        if edge_lock {
            AbyssPolicy::EdgeLock
        } else {
            AbyssPolicy::Zero
        }
    }
}

/// Read-only view of a region of a single channel image, resolving rows and
/// samples outside the region with an [`AbyssPolicy`].
#[derive(Clone, Copy)]
pub(crate) struct AbyssView<'a> {
    data: &'a [f32],
    stride: usize,
    region: Region,
    policy: AbyssPolicy,
}

impl<'a> AbyssView<'a> {
    /// The region must already be validated against the image size.
    pub(crate) fn new(src: &'a Image<f32, 1>, region: Region, policy: AbyssPolicy) -> Self {
        Self {
            data: src.as_slice(),
            stride: src.width(),
            region,
            policy,
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.region.width
    }

    pub(crate) fn height(&self) -> usize {
        self.region.height
    }

    pub(crate) fn policy(&self) -> AbyssPolicy {
        self.policy
    }

    fn region_row(&self, y: usize) -> &'a [f32] {
        let start = (self.region.y + y) * self.stride + self.region.x;
        &self.data[start..start + self.region.width]
    }

    /// Samples of every row of the region, top to bottom.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &'a [f32]> + '_ {
        (0..self.height()).map(move |y| self.region_row(y))
    }

    /// Fill `dst` with row `y`, which may lie above or below the region.
    pub(crate) fn fill_row(&self, y: isize, dst: &mut [f32]) {
        let height = self.height() as isize;
        match self.policy {
            AbyssPolicy::EdgeLock => {
                let y = y.clamp(0, height - 1) as usize;
                dst.copy_from_slice(self.region_row(y));
            }
            AbyssPolicy::Zero => {
                if (0..height).contains(&y) {
                    dst.copy_from_slice(self.region_row(y as usize));
                } else {
                    dst.fill(0.0);
                }
            }
        }
    }

    /// Sample at `(x, y)`, either of which may lie outside the region.
    pub(crate) fn sample(&self, x: isize, y: isize) -> f32 {
        let width = self.width() as isize;
        let height = self.height() as isize;
        match self.policy {
            AbyssPolicy::EdgeLock => {
                let x = x.clamp(0, width - 1) as usize;
                let y = y.clamp(0, height - 1) as usize;
                self.region_row(y)[x]
            }
            AbyssPolicy::Zero => {
                if (0..width).contains(&x) && (0..height).contains(&y) {
                    self.region_row(y as usize)[x as usize]
                } else {
                    0.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morpho_image::{ImageError, ImageSize};

    fn image_3x2() -> Result<Image<f32, 1>, ImageError> {
        #[rustfmt::skip]
        let image = Image::new(
            ImageSize { width: 3, height: 2 },
            vec![
                1.0, 2.0, 3.0,
                4.0, 5.0, 6.0,
            ],
        )?;
        Ok(image)
    }

    #[test]
    fn test_policy_from_bool() {
        assert_eq!(AbyssPolicy::from(true), AbyssPolicy::EdgeLock);
        assert_eq!(AbyssPolicy::from(false), AbyssPolicy::Zero);
        assert_eq!(AbyssPolicy::Zero.constant(), Some(0.0));
        assert_eq!(AbyssPolicy::EdgeLock.constant(), None);
    }

    #[test]
    fn test_edge_lock_rows() -> Result<(), ImageError> {
        let image = image_3x2()?;
        let view = AbyssView::new(&image, Region::full(image.size()), AbyssPolicy::EdgeLock);
        let mut row = [0.0; 3];

        view.fill_row(-3, &mut row);
        assert_eq!(row, [1.0, 2.0, 3.0]);
        view.fill_row(5, &mut row);
        assert_eq!(row, [4.0, 5.0, 6.0]);

        // corners resolve per axis
        assert_eq!(view.sample(-1, -1), 1.0);
        assert_eq!(view.sample(7, 9), 6.0);
        assert_eq!(view.sample(1, -4), 2.0);
        Ok(())
    }

    #[test]
    fn test_zero_rows() -> Result<(), ImageError> {
        let image = image_3x2()?;
        let view = AbyssView::new(&image, Region::full(image.size()), AbyssPolicy::Zero);
        let mut row = [9.0; 3];

        view.fill_row(-1, &mut row);
        assert_eq!(row, [0.0; 3]);
        view.fill_row(1, &mut row);
        assert_eq!(row, [4.0, 5.0, 6.0]);
        assert_eq!(view.sample(3, 1), 0.0);
        assert_eq!(view.sample(2, 1), 6.0);
        Ok(())
    }

    #[test]
    fn test_region_view() -> Result<(), ImageError> {
        let image = image_3x2()?;
        let view = AbyssView::new(&image, Region::new(1, 1, 2, 1), AbyssPolicy::EdgeLock);
        let mut row = [0.0; 2];

        view.fill_row(-2, &mut row);
        assert_eq!(row, [5.0, 6.0]);
        assert_eq!(view.sample(-1, 0), 5.0);
        assert_eq!(view.rows().collect::<Vec<_>>(), vec![&[5.0f32, 6.0][..]]);
        Ok(())
    }
}
