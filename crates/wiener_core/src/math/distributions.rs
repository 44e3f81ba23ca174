//! Normal distribution functions.
//!
//! Provides the probability density and cumulative distribution functions of
//! the normal family, generic over `T: Float` so they work with `f64` and
//! `f32` alike. The CDF uses the Abramowitz & Stegun complementary error
//! function approximation (formula 7.1.26, maximum error 1.5e-7).

use num_traits::Float;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Complementary error function approximation using Horner's method.
///
/// Abramowitz & Stegun 7.1.26; maximum absolute error 1.5e-7 over all x.
/// Negative arguments use the reflection erfc(-x) = 2 - erfc(x).
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    // A&S 7.1.26 coefficients
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        T::from(2.0).unwrap() - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal probability density function.
///
/// Computes φ(x) = (1 / sqrt(2π)) · exp(-x² / 2).
///
/// # Examples
/// ```
/// use wiener_core::math::distributions::standard_normal_pdf;
///
/// let peak = standard_normal_pdf(0.0_f64);
/// assert!((peak - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn standard_normal_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    frac_1_sqrt_2pi * (-half * x * x).exp()
}

/// Normal probability density function with location and scale.
///
/// Computes (1 / sqrt(2π σ²)) · exp(-½ ((x - mu) / σ)²).
///
/// # Preconditions
///
/// `sigma > 0`. The result is undefined for `sigma <= 0`; this is a
/// documented precondition of the function, not a handled case.
///
/// # Examples
/// ```
/// use wiener_core::math::distributions::normal_pdf;
///
/// // N(0, 4) at x = 0: 1 / (2 * sqrt(2π))
/// let d = normal_pdf(0.0_f64, 0.0, 2.0);
/// assert!((d - 0.1994711402).abs() < 1e-9);
/// ```
#[inline]
pub fn normal_pdf<T: Float>(x: T, mu: T, sigma: T) -> T {
    debug_assert!(sigma > T::zero(), "normal_pdf requires sigma > 0");
    let z = (x - mu) / sigma;
    standard_normal_pdf(z) / sigma
}

/// Standard normal cumulative distribution function.
///
/// Computes Φ(x) = ½ · erfc(-x / sqrt(2)). Accurate to roughly 1e-7 for all
/// finite x.
///
/// # Examples
/// ```
/// use wiener_core::math::distributions::standard_normal_cdf;
///
/// assert!((standard_normal_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// ```
#[inline]
pub fn standard_normal_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * erfc_approx(-x / sqrt_2)
}

/// Normal cumulative distribution function with location and scale.
///
/// # Preconditions
///
/// `sigma > 0`; undefined otherwise.
#[inline]
pub fn normal_cdf<T: Float>(x: T, mu: T, sigma: T) -> T {
    debug_assert!(sigma > T::zero(), "normal_cdf requires sigma > 0");
    standard_normal_cdf((x - mu) / sigma)
}
