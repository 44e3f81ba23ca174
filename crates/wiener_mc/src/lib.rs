//! # Wiener MC (Layer 2: Simulation Engine)
//!
//! Monte Carlo engine for the standard driftless, unit-variance-rate Wiener
//! process (Brownian motion). The engine
//!
//! 1. generates standard-normal variates from an injected uniform(0,1)
//!    source via the polar Box–Muller transform with one-value caching,
//! 2. synthesises discretised sample paths over a finite horizon, and
//! 3. aggregates many independent terminal values into an empirical density
//!    compared bin-by-bin against the closed-form `N(0, T)` density.
//!
//! # Architecture
//!
//! ```text
//! UniformSource (injected capability)
//!     └── NormalSampler        (polar Box–Muller, one-value cache)
//!             └── PathSimulator    (cumulative sqrt(dt)·Z increments)
//!                     └── aggregate / aggregate_par
//!                             (terminal ensemble → Histogram → DensityPoint)
//! ```
//!
//! Data flows strictly upward; the output of every layer is plain data for
//! the rendering collaborator to consume. The engine performs no I/O, no
//! persistence, and exposes no parameter-intake surface of its own.
//!
//! # Determinism
//!
//! Randomness is an explicit dependency: inject a [`SeededUniform`] for
//! reproducible production runs or a [`FixedUniform`] replay source for
//! bit-for-bit deterministic tests. Parallel aggregation derives one
//! independent source per path, so results do not depend on thread
//! scheduling.
//!
//! # Usage Example
//!
//! ```rust
//! use wiener_mc::{aggregate, EnsembleConfig, SeededUniform};
//!
//! let config = EnsembleConfig::builder()
//!     .horizon(1.0)
//!     .n_steps(250)
//!     .n_paths(2_000)
//!     .build()
//!     .unwrap();
//!
//! let result = aggregate(SeededUniform::from_seed(42), &config).unwrap();
//!
//! assert_eq!(result.finals.len(), 2_000);
//! for point in &result.density {
//!     // Observed and theoretical densities line up bin-by-bin for plotting
//!     assert!(point.observed >= 0.0 && point.theoretical > 0.0);
//! }
//! ```

pub mod ensemble;
pub mod error;
pub mod histogram;
pub mod path;
pub mod rng;

// Re-exports for convenient access
pub use ensemble::{
    aggregate, aggregate_par, EnsembleConfig, EnsembleConfigBuilder, EnsembleResult, MAX_PATHS,
    MAX_STEPS,
};
pub use error::{SimError, SourceError};
pub use histogram::{DensityPoint, Histogram, DEFAULT_BINS};
pub use path::{PathParams, PathSimulator, WienerPath};
pub use rng::{FixedUniform, NormalSampler, SeededUniform, UniformSource};
