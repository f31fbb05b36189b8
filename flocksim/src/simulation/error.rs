//! Errors raised when the simulation is built or driven incorrectly.
//!
//! Numeric singularities are not errors: the force laws resolve them to a
//! zero contribution (see [`crate::simulation::forces`]).

use thiserror::Error;

/// Precondition violations of the simulation core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// A Bezier path needs at least one segment to produce waypoints.
    #[error("bezier path must contain at least one segment")]
    EmptyPath,
    /// Path increments must be finite and non-negative.
    #[error("path increment {0} must be finite and non-negative")]
    InvalidIncrement(f64),
    /// The integrator time step must be finite and strictly positive.
    #[error("time step {0} must be finite and positive")]
    InvalidTimeStep(f64),
    /// Speed bounds must be non-negative (infinity means unbounded).
    #[error("max speed {0} must be non-negative")]
    InvalidMaxSpeed(f64),
    /// The singularity radius must be non-negative (NaN disables the guard).
    #[error("singularity radius {0} must be non-negative")]
    InvalidSingularityEps(f64),
    /// `step` was called on a simulator with no agents.
    #[error("cannot step a simulator with no agents")]
    NoAgents,
    /// `step` or `add_agent` was called while a computed step awaits commit.
    #[error("previous step has not been committed")]
    StepPending,
    /// `commit` was called without a preceding `step`.
    #[error("commit called without a computed step")]
    NothingToCommit,
    /// A scenario value is out of range.
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
}

pub type SimResult<T> = Result<T, SimError>;
