//! Morphological shrink and grow with elliptical structuring elements.
//!
//! The operators stream over the image top to bottom. A [`compute_border`]
//! profile describes the ellipse column by column, a sliding window keeps the
//! per-column extreme of every centred vertical span the profile needs, and
//! each output row is rendered from that window.

/// Error types used for morphological operations.
pub mod error;
pub use error::MorphologyError;

/// Border (abyss) handling.
pub mod border;
pub use border::AbyssPolicy;

/// Operator parameters.
pub mod params;
pub use params::{MorphParams, MAX_RADIUS};

/// Structuring element utilities.
pub mod kernel;
pub use kernel::compute_border;

mod extremum;
mod render;
mod window;

/// Streaming shrink and grow operators.
pub mod ops;
pub use ops::{
    grow, grow_region, grow_with_strategy, shrink, shrink_region, shrink_with_strategy,
};

/// Brute-force operators for auditing the streaming path.
pub mod reference;
pub use reference::{grow_reference, shrink_reference};
