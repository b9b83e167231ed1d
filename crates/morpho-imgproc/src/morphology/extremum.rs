/// The order statistic an operator keeps: the minimum for shrink, the maximum for grow.
pub(crate) trait Extremum: Send + Sync + 'static {
    /// Neutral start value, never more extreme than a sample.
    const IDENTITY: f32;

    /// Operator name used in log lines.
    const NAME: &'static str;

    /// Whether `candidate` is strictly more extreme than `current`.
    fn exceeds(candidate: f32, current: f32) -> bool;

    /// The more extreme of `a` and `b`, preferring `a` on ties.
    #[inline]
    fn pick(a: f32, b: f32) -> f32 {
        if Self::exceeds(b, a) {
            b
        } else {
            a
        }
    }

    /// The most extreme value in `values`, or [`Self::IDENTITY`] if empty.
    fn fold<'a>(values: impl IntoIterator<Item = &'a f32>) -> f32 {
        values
            .into_iter()
            .fold(Self::IDENTITY, |acc, &v| Self::pick(acc, v))
    }
}

/// Erosion keeps the minimum.
pub(crate) struct Minimum;

impl Extremum for Minimum {
    const IDENTITY: f32 = f32::INFINITY;
    const NAME: &'static str = "shrink";

    #[inline]
    fn exceeds(candidate: f32, current: f32) -> bool {
        candidate < current
    }
}

/// Dilation keeps the maximum.
pub(crate) struct Maximum;

impl Extremum for Maximum {
    const IDENTITY: f32 = f32::NEG_INFINITY;
    const NAME: &'static str = "grow";

    #[inline]
    fn exceeds(candidate: f32, current: f32) -> bool {
        candidate > current
    }
}
