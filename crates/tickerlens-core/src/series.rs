//! Deterministic downsampling of a daily price series for display.
//!
//! A year of daily closes is too dense to chart directly, so the series is
//! reduced to a bounded number of points by stride sampling. The stride
//! keeps the first point of the original series, which anchors the
//! displayed period start; the final point is only kept when it happens to
//! land on the stride. The period change is therefore always computed from
//! the original, unreduced series.

use crate::PricePoint;

/// Default display budget for a reduced series.
pub const DEFAULT_MAX_POINTS: usize = 50;

/// Reduce a price series to at most `target_max_points` points.
///
/// A series at or under the budget is returned unchanged. Otherwise every
/// k-th point is kept starting at the first, with
/// `k = ceil(len / target_max_points)`, preserving chronological order.
/// Pure and deterministic: the same input always yields the same output.
pub fn reduce(series: &[PricePoint], target_max_points: usize) -> Vec<PricePoint> {
    if target_max_points == 0 || series.len() <= target_max_points {
        return series.to_vec();
    }

    let stride = series.len().div_ceil(target_max_points);
    series.iter().step_by(stride).copied().collect()
}

/// Period change in percent, from the ORIGINAL series.
///
/// `(last - first) / first * 100` when the first price is positive, else 0.
/// Never compute this from a reduced series: reduction can drop the true
/// last point.
pub fn percent_change(series: &[PricePoint]) -> f64 {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return 0.0;
    };

    if first.price > 0.0 {
        (last.price - first.price) / first.price * 100.0
    } else {
        0.0
    }
}
