//! Mathematical functions used across the engine.
//!
//! - [`distributions`]: normal PDF/CDF, generic over `T: Float`
//! - [`stats`]: summary statistics over sample slices

pub mod distributions;
pub mod stats;
