use std::cmp::Ordering;

// Contains:
//
//   max, min  - extremes of the finite entries
//   deviation - sample standard deviation
//   quantile  - linear interpolation between order statistics of sorted data
//   ascending - comparator for sorting f64 values

/// Largest finite value, or None if there is none.
pub fn max(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|x| x.is_finite())
        .fold(None, |acc, x| match acc {
            Some(m) if m >= x => Some(m),
            _ => Some(x)
        })
}

/// Smallest finite value, or None if there is none.
pub fn min(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|x| x.is_finite())
        .fold(None, |acc, x| match acc {
            Some(m) if m <= x => Some(m),
            _ => Some(x)
        })
}

/// Sample standard deviation (n - 1 denominator) of the finite values.
/// Returns None when fewer than two finite values are present.
///
/// Uses Welford's running update, which avoids the cancellation of the
/// naive sum-of-squares formula.
pub fn deviation(values: &[f64]) -> Option<f64> {
    let mut count = 0_usize;
    let mut mean = 0.0;
    let mut sum_squares = 0.0;
    for x in values.iter().copied().filter(|x| x.is_finite()) {
        count += 1;
        let delta = x - mean;
        mean += delta / count as f64;
        sum_squares += delta * (x - mean);
    }
    if count < 2 {
        None
    }
    else {
        Some((sum_squares / (count - 1) as f64).sqrt())
    }
}

/// Quantile of already sorted data by linear interpolation between
/// the two closest order statistics.
///   For the minimum, use p = 0.0.
///   For the median, use p = 0.5.
///   For the maximum, use p = 1.0.
///
/// The result is meaningless if `sorted` is not in ascending order.
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if p <= 0.0 || n < 2 {
        return Some(sorted[0]);
    }
    if p >= 1.0 {
        return Some(sorted[n - 1]);
    }
    let h = (n - 1) as f64 * p;
    let i = h.floor() as usize;
    let (a, b) = (sorted[i], sorted[i + 1]);
    Some(a + (b - a) * (h - i as f64))
}

/// Ascending comparator usable with `sort_by`.
pub fn ascending(a: &f64, b: &f64) -> Ordering {
    a.total_cmp(b)
}
