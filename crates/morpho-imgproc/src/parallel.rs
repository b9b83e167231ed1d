use rayon::prelude::*;
use thiserror::Error;

/// Number of pixels from which [`ExecutionStrategy::Auto`] switches to parallel execution.
pub const AUTO_PARALLEL_THRESHOLD: usize = 100_000;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The row width must be non-zero.
    #[error("row width must be > 0")]
    InvalidRowWidth,
}

/// Controls how an operator is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread as a single streaming pass.
    Serial,

    /// Split the output into row bands and process them on the global Rayon pool.
    Parallel,

    /// Parallel for images with at least [`AUTO_PARALLEL_THRESHOLD`] pixels, serial otherwise.
    #[default]
    Auto,

    /// Run the row bands on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Whether an image with `num_pixels` pixels is processed in parallel.
    pub fn is_parallel(&self, num_pixels: usize) -> bool {
        match self {
            ExecutionStrategy::Serial => false,
            ExecutionStrategy::Parallel | ExecutionStrategy::Fixed(_) => true,
            ExecutionStrategy::Auto => num_pixels >= AUTO_PARALLEL_THRESHOLD,
        }
    }

    /// Number of workers the rows of an image with `num_pixels` pixels are shared by.
    pub fn num_bands(&self, num_pixels: usize) -> usize {
        match self {
            ExecutionStrategy::Fixed(n) => *n,
            s if s.is_parallel(num_pixels) => rayon::current_num_threads(),
            _ => 1,
        }
    }
}

/// Number of rows per band when `height` rows are shared by `num_bands` workers.
pub fn band_height(height: usize, num_bands: usize) -> usize {
    height.div_ceil(num_bands.max(1)).max(1)
}

/// Number of non-empty bands when `height` rows are shared by `num_bands` workers.
pub fn band_count(height: usize, num_bands: usize) -> usize {
    height.div_ceil(band_height(height, num_bands))
}

/// Process the rows of `dst` in contiguous bands.
///
/// `dst` holds `width` samples per row. `f` receives the index of the first row of
/// the band and the band's samples. In serial mode `f` is called once with the
/// whole buffer; otherwise the rows are split into one band per worker thread.
///
/// # Arguments
///
/// * `dst` - The destination buffer, row-major.
/// * `width` - Number of samples per row.
/// * `strategy` - The execution strategy.
/// * `f` - The band operation.
pub fn par_iter_bands<T, F>(
    dst: &mut [T],
    width: usize,
    strategy: ExecutionStrategy,
    f: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if width == 0 {
        return Err(ParallelError::InvalidRowWidth);
    }

    let height = dst.len() / width;

    let run = |num_bands: usize, dst: &mut [T]| {
        let rows_per_band = band_height(height, num_bands);
        dst.par_chunks_mut(rows_per_band * width)
            .enumerate()
            .for_each(|(band, chunk)| {
                let first_row = band * rows_per_band;
                log::trace!(
                    "band {band}: rows {first_row}..{}",
                    first_row + chunk.len() / width
                );
                f(first_row, chunk);
            });
    };

    match strategy {
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| run(n, dst));
        }
        s if s.is_parallel(dst.len()) => run(s.num_bands(dst.len()), dst),
        _ => f(0, dst),
    }

    Ok(())
}
