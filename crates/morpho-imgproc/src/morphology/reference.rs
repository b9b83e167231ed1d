use morpho_image::{Image, Region};

use super::extremum::{Extremum, Maximum, Minimum};
use super::kernel::EllipseKernel;
use super::ops::prepare;
use super::{MorphParams, MorphologyError};

/// Shrink (erode) by visiting every cell of the structuring ellipse.
///
/// Produces the same output as [`super::shrink`] at `O(radius_x * radius_y)`
/// cost per pixel. Intended for auditing and small images.
pub fn shrink_reference(
    src: &Image<f32, 1>,
    dst: &mut Image<f32, 1>,
    params: &MorphParams,
) -> Result<(), MorphologyError> {
    brute_force::<Minimum>(src, dst, params)
}

/// Grow (dilate) by visiting every cell of the structuring ellipse.
pub fn grow_reference(
    src: &Image<f32, 1>,
    dst: &mut Image<f32, 1>,
    params: &MorphParams,
) -> Result<(), MorphologyError> {
    brute_force::<Maximum>(src, dst, params)
}

fn brute_force<E: Extremum>(
    src: &Image<f32, 1>,
    dst: &mut Image<f32, 1>,
    params: &MorphParams,
) -> Result<(), MorphologyError> {
    let view = prepare(src, Region::full(src.size()), dst, params)?;
    let kernel = EllipseKernel::new(params.radius_x, params.radius_y);
    let mask = kernel.mask();
    let rx = kernel.radius_x() as isize;
    let ry = kernel.radius_y() as isize;
    let mask_cols = 2 * kernel.radius_x() + 1;

    // active cells as offsets from the centre
    let offsets = mask
        .iter()
        .enumerate()
        .filter(|(_, &active)| active)
        .map(|(i, _)| {
            let dy = (i / mask_cols) as isize - ry;
            let dx = (i % mask_cols) as isize - rx;
            (dx, dy)
        })
        .collect::<Vec<_>>();

    let width = view.width();
    for (y, row) in dst.as_slice_mut().chunks_exact_mut(width).enumerate() {
        for (x, dst_pixel) in row.iter_mut().enumerate() {
            *dst_pixel = offsets.iter().fold(E::IDENTITY, |acc, &(dx, dy)| {
                E::pick(acc, view.sample(x as isize + dx, y as isize + dy))
            });
        }
    }

    Ok(())
}
