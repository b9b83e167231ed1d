use super::{AbyssPolicy, MorphologyError};

/// Largest radius accepted on either axis.
pub const MAX_RADIUS: u16 = 2342;

/// Parameters of an elliptical morphological operator.
///
/// # Examples
///
/// ```
/// use morpho_imgproc::morphology::{AbyssPolicy, MorphParams};
///
/// let params = MorphParams::new(3, 2, true).unwrap();
/// assert_eq!(params.abyss(), AbyssPolicy::EdgeLock);
///
/// assert!(MorphParams::new(0, 2, false).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorphParams {
    /// Horizontal radius of the structuring ellipse.
    pub radius_x: u16,
    /// Vertical radius of the structuring ellipse.
    pub radius_y: u16,
    /// Replicate the nearest edge pixel outside the image instead of reading 0.
    pub edge_lock: bool,
}

impl Default for MorphParams {
    fn default() -> Self {
        Self {
            radius_x: 1,
            radius_y: 1,
            edge_lock: false,
        }
    }
}

impl MorphParams {
    /// Create validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MorphologyError::InvalidRadius`] if either radius is outside `[1, MAX_RADIUS]`.
    pub fn new(radius_x: u16, radius_y: u16, edge_lock: bool) -> Result<Self, MorphologyError> {
        let params = Self {
            radius_x,
            radius_y,
            edge_lock,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check both radii against `[1, MAX_RADIUS]`.
    pub fn validate(&self) -> Result<(), MorphologyError> {
        check_radius("horizontal", self.radius_x)?;
        check_radius("vertical", self.radius_y)
    }

    /// The abyss policy selected by `edge_lock`.
    pub fn abyss(&self) -> AbyssPolicy {
        AbyssPolicy::from(self.edge_lock)
    }
}

fn check_radius(axis: &'static str, radius: u16) -> Result<(), MorphologyError> {
    if radius == 0 || radius > MAX_RADIUS {
        return Err(MorphologyError::InvalidRadius { axis, radius });
    }
    Ok(())
}
