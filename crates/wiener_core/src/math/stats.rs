//! Summary statistics over sample slices.
//!
//! Small helpers shared by the engine layer and its statistical tests.
//! Both functions are single-pass over the data apart from the mean
//! subtraction in the variance.

/// Arithmetic mean of a sample.
///
/// Returns 0.0 for an empty slice.
#[inline]
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().sum();
    sum / samples.len() as f64
}

/// Unbiased sample variance (Bessel-corrected, divisor n - 1).
///
/// Returns 0.0 for slices with fewer than two elements, where the
/// estimator is undefined.
pub fn sample_variance(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let m = mean(samples);
    let sum_sq: f64 = samples.iter().map(|x| (x - m) * (x - m)).sum();
    sum_sq / (samples.len() - 1) as f64
}
