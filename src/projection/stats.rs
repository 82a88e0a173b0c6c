//! Shared numeric routines for the projection engine.
//!
//! One convention throughout: sample standard deviation with Bessel's
//! correction, type-7 (linear interpolation) percentiles.

use super::HistogramBin;

/// Threshold below which standard deviation is treated as zero
pub(crate) const STDEV_EPSILON: f64 = 1e-9;

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n-1 denominator); 0.0 when fewer than two
/// values
pub fn sample_stdev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Type-7 percentile of an already-sorted ascending slice.
///
/// `p` is a fraction in [0, 1]. Interpolates linearly between the two
/// bracketing order statistics: `idx = (n-1)*p`, blend `sorted[floor]`
/// and `sorted[ceil]` by the fractional part.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }
    let p = p.clamp(0.0, 1.0);
    let idx = (sorted.len() - 1) as f64 * p;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    let frac = idx - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Partition `[min, max]` of the samples into `bins` equal-width bins
/// and count samples per bin.
///
/// Collapses to a single bin when the samples are all identical (zero
/// range would otherwise mean zero bin width). Counts always sum to
/// `values.len()`: the top edge is inclusive, and index arithmetic is
/// clamped so boundary samples cannot fall outside the last bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if (max - min).abs() < STDEV_EPSILON {
        return vec![HistogramBin {
            lo: min,
            hi: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lo: min + width * i as f64,
            hi: min + width * (i + 1) as f64,
            count,
        })
        .collect()
}
