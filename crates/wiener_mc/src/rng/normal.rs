//! Standard-normal variate generation via the polar Box–Muller transform.
//!
//! The transform maps two independent uniform(0,1) draws `(u1, u2)` to two
//! independent standard-normal variates through a radius/angle
//! parameterisation:
//!
//! ```text
//! R = sqrt(-2 ln u1),  θ = 2π u2
//! z1 = R cos θ,        z2 = R sin θ
//! ```
//!
//! `z1` is returned immediately; `z2` is cached and served by the next call
//! without consuming the source. The cache is explicit per-sampler state, so
//! one sampler corresponds to exactly one logical stream of normal-variate
//! consumption.

use crate::error::SourceError;
use crate::rng::uniform::UniformSource;

/// Upper bound on consecutive zero draws for `u1` before the source is
/// declared broken. A healthy source hits zero with probability ~2^-53 per
/// draw; 64 zeros in a row only happens when the source itself is faulty.
const MAX_ZERO_REDRAWS: u32 = 64;

/// Standard-normal sampler over an injected uniform source.
///
/// Owns the source handle and the one-value Box–Muller cache. Over many
/// calls the output sequence is statistically indistinguishable from i.i.d.
/// standard-normal draws; the paired outputs of one transform are
/// independent by construction of the polar method.
///
/// # Source validation
///
/// Every draw from the source is checked to be finite and within `[0, 1]`;
/// violations propagate unchanged as [`SourceError::OutOfRange`]. The value
/// `1.0` is accepted: only `ln(0)` needs guarding, and `R = 0` is a valid
/// (zero) variate.
///
/// # Examples
///
/// ```rust
/// use wiener_mc::rng::{FixedUniform, NormalSampler};
///
/// // u1 = 0.5, u2 = 0.5: θ = π, so z1 = -R = -sqrt(2 ln 2)
/// let mut sampler = NormalSampler::new(FixedUniform::cycling(vec![0.5]));
/// let z1 = sampler.next().unwrap();
/// assert!((z1 + (2.0 * std::f64::consts::LN_2).sqrt()).abs() < 1e-12);
/// ```
pub struct NormalSampler<U: UniformSource> {
    source: U,
    cache: Option<f64>,
}

impl<U: UniformSource> NormalSampler<U> {
    /// Creates a sampler with an empty cache over the given source.
    #[inline]
    pub fn new(source: U) -> Self {
        Self {
            source,
            cache: None,
        }
    }

    /// Returns the next standard-normal variate.
    ///
    /// A call with an empty cache consumes two draws from the source (plus
    /// any redraws of a zero `u1`); the following call consumes none and
    /// returns the cached second variate.
    ///
    /// # Errors
    ///
    /// Propagates source failures unchanged; see [`SourceError`].
    pub fn next(&mut self) -> Result<f64, SourceError> {
        if let Some(z) = self.cache.take() {
            return Ok(z);
        }

        // Redraw u1 until nonzero: ln(0) guard, bounded against a source
        // stuck at zero.
        let mut u1 = self.draw()?;
        let mut redraws = 0;
        while u1 == 0.0 {
            redraws += 1;
            if redraws > MAX_ZERO_REDRAWS {
                return Err(SourceError::Degenerate(redraws));
            }
            u1 = self.draw()?;
        }
        let u2 = self.draw()?;

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f64::consts::PI * u2;

        self.cache = Some(r * theta.sin());
        Ok(r * theta.cos())
    }

    /// Fills the buffer with standard-normal variates.
    ///
    /// Zero-allocation batch form of [`next`](Self::next); the buffer must
    /// be pre-allocated by the caller.
    pub fn fill(&mut self, buffer: &mut [f64]) -> Result<(), SourceError> {
        for slot in buffer.iter_mut() {
            *slot = self.next()?;
        }
        Ok(())
    }

    /// Discards the cached second variate, if any.
    ///
    /// Call at a logical run boundary when determinism of the next run must
    /// not depend on the parity of previous consumption.
    #[inline]
    pub fn reset(&mut self) {
        self.cache = None;
    }

    /// Whether a cached variate is waiting to be served.
    #[inline]
    pub fn has_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Consumes the sampler, returning the underlying source.
    #[inline]
    pub fn into_source(self) -> U {
        self.source
    }

    fn draw(&mut self) -> Result<f64, SourceError> {
        let u = self.source.next_uniform()?;
        if !u.is_finite() || !(0.0..=1.0).contains(&u) {
            return Err(SourceError::OutOfRange(u));
        }
        Ok(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::uniform::{FixedUniform, SeededUniform};
    use approx::assert_relative_eq;
    use wiener_core::math::stats::{mean, sample_variance};

    #[test]
    fn test_known_transform_values() {
        // u1 = 0.5, u2 = 0.5: R = sqrt(2 ln 2), θ = π
        let mut sampler = NormalSampler::new(FixedUniform::exhausting(vec![0.5, 0.5]));
        let r = (2.0 * std::f64::consts::LN_2).sqrt();

        let z1 = sampler.next().unwrap();
        assert_relative_eq!(z1, -r, epsilon = 1e-12);

        // Second call serves the cached z2 = R sin(π) ≈ 0 without drawing
        let z2 = sampler.next().unwrap();
        assert!(z2.abs() < 1e-12);
    }

    #[test]
    fn test_cache_alternation_consumes_pairs() {
        let mut sampler = NormalSampler::new(FixedUniform::cycling(vec![0.3, 0.7]));
        assert!(!sampler.has_cached());
        sampler.next().unwrap();
        assert!(sampler.has_cached());
        sampler.next().unwrap();
        assert!(!sampler.has_cached());

        // Four variates from an exhausting source of exactly four uniforms
        let mut strict = NormalSampler::new(FixedUniform::exhausting(vec![0.3, 0.7, 0.6, 0.2]));
        for _ in 0..4 {
            strict.next().unwrap();
        }
        assert_eq!(strict.next(), Err(SourceError::Exhausted));
    }

    #[test]
    fn test_reset_discards_cached_value() {
        let mut sampler = NormalSampler::new(FixedUniform::cycling(vec![0.3, 0.7]));
        sampler.next().unwrap();
        assert!(sampler.has_cached());
        sampler.reset();
        assert!(!sampler.has_cached());
    }

    #[test]
    fn test_zero_u1_is_redrawn() {
        // First draw is 0 and must be skipped; u1 = 0.5, u2 = 0.5 follow
        let mut sampler = NormalSampler::new(FixedUniform::exhausting(vec![0.0, 0.5, 0.5]));
        let z1 = sampler.next().unwrap();
        assert_relative_eq!(z1, -(2.0 * std::f64::consts::LN_2).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_stuck_at_zero_source_fails() {
        let mut sampler = NormalSampler::new(FixedUniform::cycling(vec![0.0]));
        assert!(matches!(sampler.next(), Err(SourceError::Degenerate(_))));
    }

    #[test]
    fn test_out_of_range_propagates() {
        let mut sampler = NormalSampler::new(FixedUniform::cycling(vec![1.5]));
        assert_eq!(sampler.next(), Err(SourceError::OutOfRange(1.5)));

        let mut negative = NormalSampler::new(FixedUniform::cycling(vec![-0.1]));
        assert_eq!(negative.next(), Err(SourceError::OutOfRange(-0.1)));

        let mut nan = NormalSampler::new(FixedUniform::cycling(vec![f64::NAN]));
        assert!(matches!(nan.next(), Err(SourceError::OutOfRange(_))));
    }

    #[test]
    fn test_u1_of_one_yields_zero_variate() {
        // ln(1) = 0, so R = 0 and both variates are exactly zero
        let mut sampler = NormalSampler::new(FixedUniform::cycling(vec![1.0]));
        assert_eq!(sampler.next(), Ok(0.0));
        assert_eq!(sampler.next(), Ok(0.0));
    }

    #[test]
    fn test_seeded_determinism() {
        let mut a = NormalSampler::new(SeededUniform::from_seed(2024));
        let mut b = NormalSampler::new(SeededUniform::from_seed(2024));
        for _ in 0..1000 {
            assert_eq!(a.next().unwrap(), b.next().unwrap());
        }
    }

    #[test]
    fn test_moments_of_ten_thousand_variates() {
        let mut sampler = NormalSampler::new(SeededUniform::from_seed(42));
        let mut variates = vec![0.0; 10_000];
        sampler.fill(&mut variates).unwrap();

        // Sample mean has sd 0.01 here; 0.05 is a 5-sigma bound
        assert!(mean(&variates).abs() < 0.05);
        // Sample variance has sd ~0.014 here
        assert!((sample_variance(&variates) - 1.0).abs() < 0.06);
    }

    #[test]
    fn test_fill_empty_buffer_is_noop() {
        let mut sampler = NormalSampler::new(FixedUniform::exhausting(vec![]));
        let mut buffer: [f64; 0] = [];
        assert!(sampler.fill(&mut buffer).is_ok());
    }
}
