use std::marker::PhantomData;

use super::border::{AbyssPolicy, AbyssView};
use super::extremum::Extremum;

/// Sliding vertical window of per-column extremes.
///
/// For the current output row `y`, the cell `(x, k)` holds the extreme of the
/// input rows `y - k ..= y + k` at column `x`, for `k` in `0..=radius_y`.
/// The row buffers hold the input rows `y ..= y + radius_y` and rotate by one
/// slot per output row.
pub(crate) struct ColumnWindow<E: Extremum> {
    width: usize,
    depth: usize,
    policy: AbyssPolicy,
    rows: Vec<Vec<f32>>,
    // column-major, `depth` cells per column plus one trailing abyss column
    cells: Vec<f32>,
    _op: PhantomData<E>,
}

impl<E: Extremum> ColumnWindow<E> {
    /// Build the window as it stands just before output row `first_row`.
    ///
    /// Rows above `first_row` are read from `view`, so a band starting in the
    /// middle of the image sees the same state as a full top-to-bottom pass.
    pub(crate) fn seed(view: &AbyssView, radius_y: usize, first_row: usize) -> Self {
        let width = view.width();
        let depth = radius_y + 1;
        let above = first_row as isize - 1;

        let mut rows = vec![vec![0.0; width]; depth];
        for (k, row) in rows.iter_mut().enumerate() {
            view.fill_row(above + k as isize, row);
        }

        let abyss = view.policy().constant().unwrap_or(0.0);
        let mut cells = vec![abyss; (width + 1) * depth];
        for (x, column) in cells.chunks_exact_mut(depth).take(width).enumerate() {
            column[0] = rows[0][x];
        }

        let mut scratch = vec![0.0; width];
        for k in 1..depth {
            view.fill_row(above - k as isize, &mut scratch);
            for (x, column) in cells.chunks_exact_mut(depth).take(width).enumerate() {
                column[k] = E::pick(E::pick(column[k - 1], scratch[x]), rows[k][x]);
            }
        }

        Self {
            width,
            depth,
            policy: view.policy(),
            rows,
            cells,
            _op: PhantomData,
        }
    }

    /// Move the window down to output row `y`.
    pub(crate) fn advance(&mut self, view: &AbyssView, y: usize) {
        let radius_y = self.depth - 1;
        let Self {
            width,
            depth,
            rows,
            cells,
            ..
        } = self;

        rows.rotate_left(1);
        view.fill_row((y + radius_y) as isize, &mut rows[radius_y]);

        for (x, column) in cells.chunks_exact_mut(*depth).take(*width).enumerate() {
            for k in (1..*depth).rev() {
                column[k] = E::pick(E::pick(column[k - 1], rows[k - 1][x]), rows[k][x]);
            }
            column[0] = rows[0][x];
        }
    }

    /// Extreme of column `x` over the rows `y - k ..= y + k`.
    ///
    /// Columns left or right of the image resolve to the edge column under
    /// edge-lock and to the constant abyss column otherwise.
    #[inline]
    pub(crate) fn get(&self, x: isize, k: usize) -> f32 {
        let column = if x >= 0 && (x as usize) < self.width {
            x as usize
        } else {
            match self.policy {
                AbyssPolicy::EdgeLock if x < 0 => 0,
                AbyssPolicy::EdgeLock => self.width - 1,
                AbyssPolicy::Zero => self.width,
            }
        };
        self.cells[column * self.depth + k]
    }
}
