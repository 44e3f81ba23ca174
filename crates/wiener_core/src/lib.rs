//! # Wiener Core (Layer 1: Pure Mathematics)
//!
//! Stateless mathematical building blocks for the Wiener-process Monte Carlo
//! engine:
//!
//! - Normal distribution functions (PDF, CDF) generic over any
//!   `num_traits::Float` type
//! - Summary statistics (mean, sample variance) over sample slices
//!
//! This crate has no randomness and no mutable state. Everything here is a
//! pure function, which is what makes the statistical guarantees of the
//! engine layer independently checkable.
//!
//! ## Usage Example
//!
//! ```rust
//! use wiener_core::math::distributions::normal_pdf;
//!
//! // Density of N(0, 4) at the origin: 1 / (2 * sqrt(2π)) ≈ 0.1995
//! let density = normal_pdf(0.0_f64, 0.0, 2.0);
//! assert!((density - 0.199_471_140_200_716_35).abs() < 1e-12);
//! ```

pub mod math;

// Re-exports for convenient access
pub use math::distributions::{normal_cdf, normal_pdf, standard_normal_cdf, standard_normal_pdf};
pub use math::stats::{mean, sample_variance};
