//! Discretised Wiener-process path simulation.
//!
//! A path over horizon `T` with `n` steps is the running cumulative sum of
//! independent increments `sqrt(dt) · Z`, `dt = T / n`, with each `Z` a
//! standard-normal variate. Positions are stored at times `dt, 2dt, …, n·dt`;
//! the implicit value at time 0 is 0 and is not stored. The terminal value
//! is asymptotically distributed `N(0, T)` regardless of `n`.

use crate::error::SimError;
use crate::rng::normal::NormalSampler;
use crate::rng::uniform::UniformSource;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Validated parameters for one path simulation.
///
/// # Examples
///
/// ```rust
/// use wiener_mc::path::PathParams;
///
/// let params = PathParams::new(1.0, 1000).unwrap();
/// assert_eq!(params.dt(), 0.001);
///
/// // Validation is eager and never clamps
/// assert!(PathParams::new(-1.0, 1000).is_err());
/// assert!(PathParams::new(1.0, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathParams {
    horizon: f64,
    n_steps: usize,
}

impl PathParams {
    /// Creates validated parameters.
    ///
    /// Any `n_steps >= 1` is accepted; practical upper bounds belong to the
    /// ensemble configuration layer, not the simulator.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidParameter`] when `horizon` is non-positive or
    /// non-finite, or `n_steps` is zero.
    pub fn new(horizon: f64, n_steps: usize) -> Result<Self, SimError> {
        if !horizon.is_finite() || horizon <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "horizon",
                reason: format!("must be positive and finite, got {horizon}"),
            });
        }
        if n_steps == 0 {
            return Err(SimError::InvalidParameter {
                name: "n_steps",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self { horizon, n_steps })
    }

    /// Time horizon `T`.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Number of discretisation steps `n`.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Step size `dt = T / n`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.horizon / self.n_steps as f64
    }
}

/// One discretised Brownian path.
///
/// `positions[i]` is the process value at time `(i + 1)·dt`;
/// `terminal == positions[n - 1]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WienerPath {
    /// Positions at times `dt, 2dt, …, n·dt`.
    pub positions: Vec<f64>,
    /// The final position, `positions[n - 1]`.
    pub terminal: f64,
}

/// Simulator producing discretised Wiener paths from a normal sampler.
///
/// The sampler cache persists across `simulate` calls on one simulator
/// (matching the reference behaviour of a long-lived generator stream).
/// Call [`reset`](Self::reset) at a run boundary if the next simulation must
/// not depend on the parity of previous variate consumption.
///
/// # Examples
///
/// ```rust
/// use wiener_mc::path::{PathParams, PathSimulator};
/// use wiener_mc::rng::SeededUniform;
///
/// let mut simulator = PathSimulator::new(SeededUniform::from_seed(42));
/// let params = PathParams::new(1.0, 250).unwrap();
///
/// let path = simulator.simulate(&params).unwrap();
/// assert_eq!(path.positions.len(), 250);
/// assert_eq!(path.terminal, path.positions[249]);
/// ```
pub struct PathSimulator<U: UniformSource> {
    sampler: NormalSampler<U>,
}

impl<U: UniformSource> PathSimulator<U> {
    /// Creates a simulator over a fresh sampler for the given source.
    #[inline]
    pub fn new(source: U) -> Self {
        Self {
            sampler: NormalSampler::new(source),
        }
    }

    /// Simulates one path, returning all positions and the terminal value.
    ///
    /// # Errors
    ///
    /// Propagates upstream source failures unchanged.
    pub fn simulate(&mut self, params: &PathParams) -> Result<WienerPath, SimError> {
        let sqrt_dt = params.dt().sqrt();
        let mut positions = Vec::with_capacity(params.n_steps());
        let mut level = 0.0;
        for _ in 0..params.n_steps() {
            let z = self.sampler.next()?;
            level += sqrt_dt * z;
            positions.push(level);
        }
        Ok(WienerPath {
            positions,
            terminal: level,
        })
    }

    /// Simulates one path keeping only the terminal value.
    ///
    /// Allocation-free variant for ensemble runs where intermediate
    /// positions are never consumed.
    ///
    /// # Errors
    ///
    /// Propagates upstream source failures unchanged, as [`simulate`](Self::simulate) does.
    pub fn simulate_terminal(&mut self, params: &PathParams) -> Result<f64, SimError> {
        let sqrt_dt = params.dt().sqrt();
        let mut level = 0.0;
        for _ in 0..params.n_steps() {
            level += sqrt_dt * self.sampler.next()?;
        }
        Ok(level)
    }

    /// Clears the sampler's Box–Muller cache.
    #[inline]
    pub fn reset(&mut self) {
        self.sampler.reset();
    }

    /// Consumes the simulator, returning the underlying source.
    #[inline]
    pub fn into_source(self) -> U {
        self.sampler.into_source()
    }
}
