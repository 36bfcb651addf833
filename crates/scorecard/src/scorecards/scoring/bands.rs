//! Fixed banded-threshold scorers mapping a variance percentage to points.
//!
//! Every scorer is total over the reals: the bands partition the number
//! line, infinities land in the outermost bands, and `NaN` collapses to a
//! zero score rather than propagating.

/// Points for a higher-is-better metric (revenue, gross profit, net profit).
pub fn score_standard(variance_percent: f64) -> u8 {
    if variance_percent.is_nan() {
        return 0;
    }
    if variance_percent >= 10.0 {
        10
    } else if variance_percent >= 5.0 {
        8
    } else if variance_percent >= -4.0 {
        6
    } else if variance_percent >= -9.0 {
        3
    } else {
        0
    }
}

/// Points for a cost metric where a lower variance is desirable (overheads
/// against budget).
///
/// The band edges close on the opposite side from [`score_standard`]: the
/// on-target band here is `(-5, 4]`, not a mirror image of `[-4, 5)`. The
/// rubric defines the cost bands this way and both sets are kept verbatim.
pub fn score_inverted(variance_percent: f64) -> u8 {
    if variance_percent.is_nan() {
        return 0;
    }
    if variance_percent <= -10.0 {
        10
    } else if variance_percent <= -5.0 {
        8
    } else if variance_percent <= 4.0 {
        6
    } else if variance_percent <= 9.0 {
        3
    } else {
        0
    }
}

/// Points for the productivity ratio variance, on wider bands than the
/// standard scorer.
pub fn score_productivity(variance_percent: f64) -> u8 {
    if variance_percent.is_nan() {
        return 0;
    }
    if variance_percent >= 15.0 {
        10
    } else if variance_percent >= 5.0 {
        8
    } else if variance_percent >= -4.0 {
        6
    } else if variance_percent >= -14.0 {
        3
    } else {
        0
    }
}

/// Variance of an actual productivity ratio against its benchmark, as a
/// percentage.
///
/// A zero benchmark or a `NaN` input yields the neutral variance `0.0`
/// instead of dividing by zero. Callers therefore never see `NaN` or an
/// error from this helper.
pub fn productivity_variance(benchmark: f64, actual: f64) -> f64 {
    if benchmark == 0.0 || benchmark.is_nan() || actual.is_nan() {
        return 0.0;
    }
    (actual - benchmark) / benchmark * 100.0
}

/// Generic `(actual - target) / target * 100` variance for callers holding
/// raw monthly figures rather than precomputed variances. Shares the
/// fail-to-neutral policy of [`productivity_variance`].
pub fn variance_percent(actual: f64, target: f64) -> f64 {
    if target == 0.0 || target.is_nan() || actual.is_nan() {
        return 0.0;
    }
    (actual - target) / target * 100.0
}
