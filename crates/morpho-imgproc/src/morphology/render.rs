use super::extremum::Extremum;
use super::kernel::EllipseKernel;
use super::window::ColumnWindow;

/// Render one output row from the column window.
///
/// Each output sample is the extreme of `window.get(x + o, kernel.depth(o))` over
/// the offsets `o` in `-radius_x..=radius_x`.
///
/// The scan remembers the offset of the previous extreme. While that column is
/// still inside the window at a non-negative offset, only the offsets
/// `0..=radius_x` can hold a new extreme, and if the previous value already
/// equals `saturation` nothing can beat it. `saturation` must be at least as
/// extreme as every value the window can return.
pub(crate) fn render_row<E: Extremum>(
    window: &ColumnWindow<E>,
    kernel: &EllipseKernel,
    saturation: f32,
    out: &mut [f32],
) {
    let rx = kernel.radius_x() as isize;
    let mut last_index: isize = 0;
    let mut last_value = E::IDENTITY;

    for (x, dst) in out.iter_mut().enumerate() {
        let x = x as isize;
        last_index -= 1;

        if last_index >= 0 {
            if !E::exceeds(saturation, last_value) {
                *dst = last_value;
                continue;
            }

            last_value = E::IDENTITY;
            for i in (0..=rx).rev() {
                let v = window.get(x + i, kernel.depth(i));
                if E::exceeds(v, last_value) {
                    last_value = v;
                    last_index = i;
                }
            }
        } else {
            last_index = rx;
            last_value = window.get(x + rx, kernel.depth(rx));
            for i in (-rx..rx).rev() {
                let v = window.get(x + i, kernel.depth(i));
                if E::exceeds(v, last_value) {
                    last_value = v;
                    last_index = i;
                }
            }
        }

        *dst = last_value;
    }
}

/// Render one output row by scanning every offset, without the incremental shortcut.
#[cfg(test)]
pub(crate) fn render_row_exhaustive<E: Extremum>(
    window: &ColumnWindow<E>,
    kernel: &EllipseKernel,
    out: &mut [f32],
) {
    let rx = kernel.radius_x() as isize;
    for (x, dst) in out.iter_mut().enumerate() {
        let x = x as isize;
        *dst = (-rx..=rx).fold(E::IDENTITY, |acc, o| {
            E::pick(acc, window.get(x + o, kernel.depth(o)))
        });
    }
}
