//! # Random Variate Generation
//!
//! This module supplies the randomness layer of the engine:
//!
//! - [`uniform`]: the injectable [`UniformSource`] capability plus the two
//!   shipped implementations ([`SeededUniform`] for production use,
//!   [`FixedUniform`] for deterministic replay in tests and harnesses)
//! - [`normal`]: [`NormalSampler`], the polar Box–Muller transform with
//!   one-value caching
//!
//! ## Design Rationale
//!
//! The uniform source is an explicit dependency rather than ambient global
//! state. Every consumer of normal variates owns (or mutably borrows) its
//! source, which makes statistical tests deterministic and keeps the
//! Box–Muller cache confined to a single logical stream, so parallel
//! ensemble runs can give each worker an independent source without any
//! shared mutable state.
//!
//! ## Usage Example
//!
//! ```rust
//! use wiener_mc::rng::{NormalSampler, SeededUniform};
//!
//! let mut sampler = NormalSampler::new(SeededUniform::from_seed(42));
//!
//! // Standard-normal variates, reproducible for a given seed
//! let z = sampler.next().unwrap();
//! assert!(z.is_finite());
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! sampler.fill(&mut buffer).unwrap();
//! ```

pub mod normal;
pub mod uniform;

// Public re-exports
pub use normal::NormalSampler;
pub use uniform::{FixedUniform, SeededUniform, UniformSource};
