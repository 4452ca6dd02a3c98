//! Weighted-aggregation primitives shared by both query paths.
//!
//! Everything here is pure arithmetic over `(value, weight)` pairs. Rounding
//! is deliberately separate ([`round2`]) and applied only at the point of
//! emission; intermediate values keep full precision.

/// Shots-weighted mean: `sum(v * w) / sum(w)`, or `0` when the weight sum is
/// not positive. This is the search path's divide-by-zero guard.
pub fn weighted_average(pairs: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    let (num, den) = accumulate(pairs);
    if den > 0.0 {
        num / den
    } else {
        0.0
    }
}

/// Leaderboard variant: the weight sum is floored at 1 before dividing.
///
/// This differs observably from [`weighted_average`] — a weight sum between 0
/// and 1 divides by 1 here, not by the true sum. The asymmetry between the two
/// query paths is intentional and preserved.
pub fn weighted_average_floored(pairs: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    let (num, den) = accumulate(pairs);
    num / den.max(1.0)
}

fn accumulate(pairs: impl IntoIterator<Item = (f64, f64)>) -> (f64, f64) {
    pairs
        .into_iter()
        .fold((0.0, 0.0), |(num, den), (value, weight)| {
            (num + value * weight, den + weight)
        })
}

/// Difficulty-adjusted performance: `Shot+ × Tournament Rating / 100`.
///
/// Any non-finite result collapses to `0`.
pub fn adjusted_rating(shot_plus: f64, rating: f64) -> f64 {
    let adjusted = shot_plus * rating / 100.0;
    if adjusted.is_finite() {
        adjusted
    } else {
        0.0
    }
}

/// Round to two decimal places for emission.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
