//! Error types for the simulation engine.
//!
//! Two layers of failure exist: upstream failures of the injected uniform
//! source ([`SourceError`]) and engine-level failures ([`SimError`]), which
//! wrap the former. A degenerate ensemble (all terminal values identical) is
//! deliberately NOT an error; it is handled as a well-defined single-bin
//! histogram outcome.

use thiserror::Error;

/// Failure of the injected uniform(0,1) source.
///
/// These are propagated unchanged to the caller; the engine never retries a
/// failed source (the redraw-until-nonzero loop in the Box–Muller transform
/// is a numerical guard against `ln(0)`, not fault recovery).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// The source produced a value outside `[0, 1]` or a non-finite value.
    #[error("uniform source returned {0} outside [0, 1]")]
    OutOfRange(f64),

    /// A finite replay source ran out of values.
    #[error("uniform source exhausted")]
    Exhausted,

    /// The source returned exactly zero on every redraw attempt.
    ///
    /// A healthy source reaches this with probability zero; hitting it means
    /// the source itself is broken.
    #[error("uniform source returned zero {0} consecutive times")]
    Degenerate(u32),
}

/// Engine-level simulation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A caller-supplied parameter was rejected by eager validation.
    ///
    /// Parameters are never silently clamped; invalid input fails before any
    /// simulation work begins.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Upstream uniform-source failure, propagated unchanged.
    #[error(transparent)]
    Source(#[from] SourceError),
}
