use morpho_image::{Image, ImageError, Region};

use super::border::AbyssView;
use super::extremum::{Extremum, Maximum, Minimum};
use super::kernel::EllipseKernel;
use super::render::render_row;
use super::window::ColumnWindow;
use super::{MorphParams, MorphologyError};
use crate::parallel::{self, ExecutionStrategy};

/// Shrink (erode) a single channel image with an elliptical structuring element.
///
/// Every output pixel becomes the minimum of the input over the ellipse with
/// radii `params.radius_x` and `params.radius_y` centred on it. Outside the image
/// the nearest edge pixel is replicated if `params.edge_lock` is set, otherwise
/// the image reads as `0`.
///
/// Uses [`ExecutionStrategy::Auto`]. For explicit control, use
/// [`shrink_with_strategy`].
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image, same size as `src`.
/// * `params` - The operator parameters.
///
/// # Examples
///
/// ```
/// use morpho_image::{Image, ImageSize};
/// use morpho_imgproc::morphology::{shrink, MorphParams};
///
/// let size = ImageSize { width: 5, height: 5 };
/// let src = Image::<f32, 1>::from_size_val(size, 1.0).unwrap();
/// let mut dst = Image::<f32, 1>::from_size_val(size, 0.0).unwrap();
///
/// shrink(&src, &mut dst, &MorphParams::new(1, 1, false).unwrap()).unwrap();
///
/// assert_eq!(dst.get([0, 2, 0]), Some(&0.0));
/// assert_eq!(dst.get([2, 2, 0]), Some(&1.0));
/// ```
pub fn shrink(
    src: &Image<f32, 1>,
    dst: &mut Image<f32, 1>,
    params: &MorphParams,
) -> Result<(), MorphologyError> {
    shrink_with_strategy(src, dst, params, ExecutionStrategy::Auto)
}

/// Shrink (erode) a single channel image with an explicit execution strategy.
///
/// Parallel strategies split the output into row bands; the result is identical
/// to the serial pass.
pub fn shrink_with_strategy(
    src: &Image<f32, 1>,
    dst: &mut Image<f32, 1>,
    params: &MorphParams,
    strategy: ExecutionStrategy,
) -> Result<(), MorphologyError> {
    morph::<Minimum>(src, Region::full(src.size()), dst, params, strategy)
}

/// Shrink (erode) a rectangular region of an image.
///
/// The borders of `region` act as the image borders: pixels outside the region
/// are never read. `dst` must have the size of the region.
pub fn shrink_region(
    src: &Image<f32, 1>,
    region: Region,
    dst: &mut Image<f32, 1>,
    params: &MorphParams,
) -> Result<(), MorphologyError> {
    morph::<Minimum>(src, region, dst, params, ExecutionStrategy::Auto)
}

/// Grow (dilate) a single channel image with an elliptical structuring element.
///
/// The dual of [`shrink`]: every output pixel becomes the maximum of the input
/// over the ellipse centred on it.
///
/// # Examples
///
/// ```
/// use morpho_image::{Image, ImageSize};
/// use morpho_imgproc::morphology::{grow, MorphParams};
///
/// let size = ImageSize { width: 3, height: 1 };
/// let src = Image::<f32, 1>::new(size, vec![0.0, 0.0, 1.0]).unwrap();
/// let mut dst = Image::<f32, 1>::from_size_val(size, 0.0).unwrap();
///
/// grow(&src, &mut dst, &MorphParams::new(1, 1, false).unwrap()).unwrap();
///
/// assert_eq!(dst.as_slice(), &[0.0, 1.0, 1.0]);
/// ```
pub fn grow(
    src: &Image<f32, 1>,
    dst: &mut Image<f32, 1>,
    params: &MorphParams,
) -> Result<(), MorphologyError> {
    grow_with_strategy(src, dst, params, ExecutionStrategy::Auto)
}

/// Grow (dilate) a single channel image with an explicit execution strategy.
pub fn grow_with_strategy(
    src: &Image<f32, 1>,
    dst: &mut Image<f32, 1>,
    params: &MorphParams,
    strategy: ExecutionStrategy,
) -> Result<(), MorphologyError> {
    morph::<Maximum>(src, Region::full(src.size()), dst, params, strategy)
}

/// Grow (dilate) a rectangular region of an image.
pub fn grow_region(
    src: &Image<f32, 1>,
    region: Region,
    dst: &mut Image<f32, 1>,
    params: &MorphParams,
) -> Result<(), MorphologyError> {
    morph::<Maximum>(src, region, dst, params, ExecutionStrategy::Auto)
}

/// Validate the arguments shared by every operator and build the abyss view.
pub(crate) fn prepare<'a>(
    src: &'a Image<f32, 1>,
    region: Region,
    dst: &Image<f32, 1>,
    params: &MorphParams,
) -> Result<AbyssView<'a>, MorphologyError> {
    params.validate()?;

    if !region.fits_in(src.size()) {
        return Err(ImageError::RegionOutOfBounds(region, src.size()).into());
    }

    if region.size().is_empty() {
        return Err(MorphologyError::EmptyImage);
    }

    if region.size() != dst.size() {
        return Err(MorphologyError::SizeMismatch {
            src: region.size(),
            dst: dst.size(),
        });
    }

    let view = AbyssView::new(src, region, params.abyss());

    // minimum and maximum are only an order statistic over finite samples
    for (y, row) in view.rows().enumerate() {
        if let Some(x) = row.iter().position(|v| !v.is_finite()) {
            return Err(MorphologyError::NonFiniteSample { x, y });
        }
    }

    Ok(view)
}

fn morph<E: Extremum>(
    src: &Image<f32, 1>,
    region: Region,
    dst: &mut Image<f32, 1>,
    params: &MorphParams,
    strategy: ExecutionStrategy,
) -> Result<(), MorphologyError> {
    let view = prepare(src, region, dst, params)?;
    let kernel = EllipseKernel::new(params.radius_x, params.radius_y);

    // the most extreme value any neighbourhood can produce
    let saturation = E::pick(
        E::fold(view.rows().flatten()),
        view.policy().constant().unwrap_or(E::IDENTITY),
    );

    let num_bands = strategy.num_bands(view.width() * view.height());
    log::debug!(
        "{}: {}x{} radius {}x{} abyss {:?} bands {}",
        E::NAME,
        view.width(),
        view.height(),
        params.radius_x,
        params.radius_y,
        view.policy(),
        parallel::band_count(view.height(), num_bands),
    );

    let width = view.width();
    parallel::par_iter_bands(dst.as_slice_mut(), width, strategy, |first_row, band| {
        let mut window = ColumnWindow::<E>::seed(&view, kernel.radius_y(), first_row);
        for (dy, out) in band.chunks_exact_mut(width).enumerate() {
            window.advance(&view, first_row + dy);
            render_row(&window, &kernel, saturation, out);
        }
    })?;

    Ok(())
}
