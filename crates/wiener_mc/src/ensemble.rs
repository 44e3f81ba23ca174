//! Monte Carlo aggregation of Wiener terminal values.
//!
//! Repeatedly simulates paths with identical `(T, n)` parameters, collects
//! the terminal values, and summarises them as an empirical density
//! alongside the closed-form `N(0, T)` theoretical density. Both the raw
//! ensemble and the binned density comparison are returned, so a rendering
//! collaborator can plot either form.
//!
//! # Concurrency
//!
//! [`aggregate`] is the sequential reference behaviour: one sampler stream
//! shared by all paths. [`aggregate_par`] runs the embarrassingly-parallel
//! form under Rayon, deriving an independent seeded source per path so no
//! sampler cache is ever shared between workers and results are
//! reproducible regardless of thread count.

use rayon::prelude::*;

use crate::error::SimError;
use crate::histogram::{DensityPoint, Histogram, DEFAULT_BINS};
use crate::path::{PathParams, PathSimulator};
use crate::rng::uniform::{SeededUniform, UniformSource};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of ensemble paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps per path allowed in an ensemble run.
///
/// A resource bound of this configuration layer; [`PathParams`] itself
/// accepts any positive step count.
pub const MAX_STEPS: usize = 10_000;

/// Ensemble simulation configuration.
///
/// Immutable once built; use [`EnsembleConfig::builder`] to construct.
///
/// # Examples
///
/// ```rust
/// use wiener_mc::ensemble::EnsembleConfig;
///
/// let config = EnsembleConfig::builder()
///     .horizon(4.0)
///     .n_steps(500)
///     .n_paths(200)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 200);
/// assert_eq!(config.bins(), 20);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EnsembleConfig {
    horizon: f64,
    n_steps: usize,
    n_paths: usize,
    bins: usize,
    seed: Option<u64>,
}

impl EnsembleConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> EnsembleConfigBuilder {
        EnsembleConfigBuilder::default()
    }

    /// Time horizon `T`.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Discretisation steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Number of independent paths `m`.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of histogram bins.
    #[inline]
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Seed for the derived per-path sources of [`aggregate_par`].
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Path parameters shared by every ensemble member.
    #[inline]
    pub fn path_params(&self) -> Result<PathParams, SimError> {
        PathParams::new(self.horizon, self.n_steps)
    }
}

/// Builder for [`EnsembleConfig`].
///
/// Defaults: `horizon = 1.0`, `n_steps = 100`, `n_paths = 10_000`,
/// `bins = 20`, no seed.
#[derive(Clone, Debug)]
pub struct EnsembleConfigBuilder {
    horizon: f64,
    n_steps: usize,
    n_paths: usize,
    bins: usize,
    seed: Option<u64>,
}

impl Default for EnsembleConfigBuilder {
    fn default() -> Self {
        Self {
            horizon: 1.0,
            n_steps: 100,
            n_paths: 10_000,
            bins: DEFAULT_BINS,
            seed: None,
        }
    }
}

impl EnsembleConfigBuilder {
    /// Sets the time horizon `T`.
    #[inline]
    pub fn horizon(mut self, horizon: f64) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the number of steps per path.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = n_steps;
        self
    }

    /// Sets the number of ensemble paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = n_paths;
        self
    }

    /// Sets the histogram bin count.
    #[inline]
    pub fn bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Sets the base seed for parallel aggregation.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidParameter`] on any out-of-range field; validation
    /// is eager and nothing is clamped.
    pub fn build(self) -> Result<EnsembleConfig, SimError> {
        // Path-level validation covers horizon and a positive n_steps
        PathParams::new(self.horizon, self.n_steps)?;

        if self.n_steps > MAX_STEPS {
            return Err(SimError::InvalidParameter {
                name: "n_steps",
                reason: format!("must be at most {MAX_STEPS}, got {}", self.n_steps),
            });
        }
        if self.n_paths == 0 {
            return Err(SimError::InvalidParameter {
                name: "n_paths",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.n_paths > MAX_PATHS {
            return Err(SimError::InvalidParameter {
                name: "n_paths",
                reason: format!("must be at most {MAX_PATHS}, got {}", self.n_paths),
            });
        }
        if self.bins == 0 {
            return Err(SimError::InvalidParameter {
                name: "bins",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(EnsembleConfig {
            horizon: self.horizon,
            n_steps: self.n_steps,
            n_paths: self.n_paths,
            bins: self.bins,
            seed: self.seed,
        })
    }
}

/// Result of one ensemble aggregation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnsembleResult {
    /// Terminal value of every path, in simulation order.
    pub finals: Vec<f64>,
    /// Smallest terminal value.
    pub min: f64,
    /// Largest terminal value.
    pub max: f64,
    /// Binned counts over `[min, max]`.
    pub histogram: Histogram,
    /// Observed vs `N(0, T)` theoretical density per bin.
    pub density: Vec<DensityPoint>,
}

/// Runs the ensemble sequentially against an injected uniform source.
///
/// All `m` paths share one sampler stream (the Box–Muller cache carries
/// across path boundaries, matching the reference behaviour). Running
/// min/max are tracked incrementally from infinity sentinels in the
/// collection pass.
///
/// # Errors
///
/// Eager [`SimError::InvalidParameter`] before any simulation work, and
/// upstream source failures propagated unchanged.
///
/// # Examples
///
/// ```rust
/// use wiener_mc::ensemble::{aggregate, EnsembleConfig};
/// use wiener_mc::rng::SeededUniform;
///
/// let config = EnsembleConfig::builder()
///     .horizon(1.0)
///     .n_steps(50)
///     .n_paths(500)
///     .build()
///     .unwrap();
///
/// let result = aggregate(SeededUniform::from_seed(42), &config).unwrap();
/// assert_eq!(result.finals.len(), 500);
/// assert_eq!(result.histogram.total(), 500);
/// ```
pub fn aggregate<U: UniformSource>(
    source: U,
    config: &EnsembleConfig,
) -> Result<EnsembleResult, SimError> {
    let params = config.path_params()?;
    let mut simulator = PathSimulator::new(source);

    let mut finals = Vec::with_capacity(config.n_paths());
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for _ in 0..config.n_paths() {
        let terminal = simulator.simulate_terminal(&params)?;
        if terminal < min {
            min = terminal;
        }
        if terminal > max {
            max = terminal;
        }
        finals.push(terminal);
    }

    Ok(summarise(finals, min, max, config))
}

/// Runs the ensemble in parallel across paths.
///
/// Each path owns an independent [`SeededUniform`] derived from the config
/// seed (default 0) by SplitMix64 mixing of the path index, so the result
/// is identical however Rayon schedules the work.
pub fn aggregate_par(config: &EnsembleConfig) -> Result<EnsembleResult, SimError> {
    let params = config.path_params()?;
    let base_seed = config.seed().unwrap_or(0);

    let finals = (0..config.n_paths())
        .into_par_iter()
        .map(|path_index| {
            let source = SeededUniform::from_seed(derive_seed(base_seed, path_index as u64));
            let mut simulator = PathSimulator::new(source);
            simulator.simulate_terminal(&params)
        })
        .collect::<Result<Vec<f64>, SimError>>()?;

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &terminal in &finals {
        if terminal < min {
            min = terminal;
        }
        if terminal > max {
            max = terminal;
        }
    }

    Ok(summarise(finals, min, max, config))
}

/// Bins the terminal values and pairs observed with theoretical densities.
fn summarise(finals: Vec<f64>, min: f64, max: f64, config: &EnsembleConfig) -> EnsembleResult {
    let histogram = Histogram::from_samples(&finals, config.bins());
    debug_assert_eq!(histogram.min(), min);
    debug_assert_eq!(histogram.max(), max);

    let sigma = config.horizon().sqrt();
    let density = histogram.density_points(sigma);

    EnsembleResult {
        finals,
        min,
        max,
        histogram,
        density,
    }
}

/// SplitMix64 finaliser mixing a path index into the base seed.
///
/// Gives every path a well-separated seed even for adjacent indices.
#[inline]
fn derive_seed(base: u64, index: u64) -> u64 {
    let mut z = base
        .wrapping_add(index.wrapping_add(1).wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
