//! Equal-width histogram binning and density estimation.
//!
//! The histogram partitions `[min, max]` into contiguous half-open bins of
//! equal width; each sample lands in `floor((v - min) / bin_width)`, clamped
//! to the last bin so `v == max` counts rather than falling off the end.
//! Observed density per bin is `(count / m) / bin_width`, which integrates
//! to 1 over the bins by construction, independent of sample quality.
//!
//! # Degenerate samples
//!
//! When every sample is identical (`max == min`) the natural bin width is
//! zero. Rather than produce NaN densities, the histogram places all mass in
//! bin 0 and falls back to a unit bin width centred on the common value, so
//! the observed density still integrates to 1.

use wiener_core::math::distributions::normal_pdf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of histogram bins.
pub const DEFAULT_BINS: usize = 20;

/// One bin of the empirical-vs-theoretical density comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DensityPoint {
    /// Bin centre.
    pub center: f64,
    /// Empirical density `(count / m) / bin_width`.
    pub observed: f64,
    /// Theoretical density evaluated at the bin centre.
    pub theoretical: f64,
}

/// Equal-width histogram over a sample of terminal values.
///
/// # Examples
///
/// ```rust
/// use wiener_mc::histogram::Histogram;
///
/// let histogram = Histogram::from_samples(&[0.0, 0.25, 0.5, 0.75, 1.0], 4);
/// assert_eq!(histogram.counts(), &[1, 1, 1, 2]);
/// assert_eq!(histogram.total(), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Histogram {
    min: f64,
    max: f64,
    /// Left edge of bin 0; equals `min` except in the degenerate case.
    origin: f64,
    bin_width: f64,
    counts: Vec<usize>,
}

impl Histogram {
    /// Builds a histogram from samples.
    ///
    /// Min and max are tracked in the same pass that collects the counts'
    /// bounds, starting from infinity sentinels.
    ///
    /// # Preconditions
    ///
    /// `samples` non-empty, every sample finite, `bins >= 1`. Callers reach
    /// this through validated configuration; violations are programming
    /// errors.
    pub fn from_samples(samples: &[f64], bins: usize) -> Self {
        debug_assert!(!samples.is_empty(), "histogram requires samples");
        debug_assert!(bins >= 1, "histogram requires at least one bin");

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in samples {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }

        // Degenerate sample: unit-width fallback keeps densities finite
        let degenerate = max == min;
        let bin_width = if degenerate {
            1.0
        } else {
            (max - min) / bins as f64
        };
        let origin = if degenerate { min - 0.5 } else { min };

        let mut counts = vec![0usize; bins];
        for &v in samples {
            let index = if degenerate {
                0
            } else {
                // Clamp guards the v == max edge and float rounding
                (((v - min) / bin_width) as usize).min(bins - 1)
            };
            counts[index] += 1;
        }

        Self {
            min,
            max,
            origin,
            bin_width,
            counts,
        }
    }

    /// Smallest sample value.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest sample value.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of each bin.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Number of bins.
    #[inline]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Per-bin sample counts.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of samples across all bins.
    #[inline]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Centre of the bin at `index`.
    #[inline]
    pub fn center(&self, index: usize) -> f64 {
        self.origin + (index as f64 + 0.5) * self.bin_width
    }

    /// Pairs the observed density of each bin with the theoretical
    /// `N(0, sigma²)` density at its centre.
    ///
    /// `sigma` is `sqrt(T)` for a Wiener terminal distribution; must be
    /// positive (see [`normal_pdf`] preconditions).
    pub fn density_points(&self, sigma: f64) -> Vec<DensityPoint> {
        let total = self.total() as f64;
        self.counts
            .iter()
            .enumerate()
            .map(|(index, &count)| {
                let center = self.center(index);
                DensityPoint {
                    center,
                    observed: (count as f64 / total) / self.bin_width,
                    theoretical: normal_pdf(center, 0.0, sigma),
                }
            })
            .collect()
    }
}
