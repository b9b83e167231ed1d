/// Compute the half-height profile of an axis-aligned ellipse.
///
/// Entry `i` of the returned vector, `i` in `0..=2 * radius_x`, is the vertical
/// half-extent of the ellipse at horizontal offset `i - radius_x`. The offset is
/// sampled at the pixel edge nearer the centre, `|o| - 0.5`, except at the centre
/// itself. Values are rounded half up.
///
/// # Arguments
///
/// * `radius_x` - Horizontal radius, must be positive.
/// * `radius_y` - Vertical radius.
///
/// # Examples
///
/// ```
/// use morpho_imgproc::morphology::compute_border;
///
/// assert_eq!(compute_border(2, 2), vec![1, 2, 2, 2, 1]);
/// assert_eq!(compute_border(1, 1), vec![1, 1, 1]);
/// ```
pub fn compute_border(radius_x: u16, radius_y: u16) -> Vec<i16> {
    let rx = radius_x as i32;
    let scale = radius_y as f64 / radius_x as f64;

    (0..=2 * rx)
        .map(|i| {
            let t = match (i - rx).abs() {
                0 => 0.0,
                o => o as f64 - 0.5,
            };
            let half_height = scale * ((rx * rx) as f64 - t * t).sqrt();
            (half_height + 0.5).floor() as i16
        })
        .collect()
}

/// The elliptical structuring element, stored as its column half-heights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EllipseKernel {
    radius_x: usize,
    radius_y: usize,
    depths: Vec<usize>,
}

impl EllipseKernel {
    pub(crate) fn new(radius_x: u16, radius_y: u16) -> Self {
        let depths = compute_border(radius_x, radius_y)
            .into_iter()
            .map(|d| d.max(0) as usize)
            .collect();

        Self {
            radius_x: radius_x as usize,
            radius_y: radius_y as usize,
            depths,
        }
    }

    pub(crate) fn radius_x(&self) -> usize {
        self.radius_x
    }

    pub(crate) fn radius_y(&self) -> usize {
        self.radius_y
    }

    /// Half-height at horizontal offset `offset`, `|offset| <= radius_x`.
    #[inline]
    pub(crate) fn depth(&self, offset: isize) -> usize {
        self.depths[(offset + self.radius_x as isize) as usize]
    }

    /// Dense `(2 * radius_y + 1) x (2 * radius_x + 1)` mask, row-major.
    pub(crate) fn mask(&self) -> Vec<bool> {
        let cols = 2 * self.radius_x + 1;
        let rows = 2 * self.radius_y + 1;
        let mut mask = vec![false; rows * cols];

        for (c, &depth) in self.depths.iter().enumerate() {
            for r in (self.radius_y - depth)..=(self.radius_y + depth) {
                mask[r * cols + c] = true;
            }
        }

        mask
    }
}
