//! Error types for the Verlet solver.
//!
//! This module provides a unified error type [`SolverError`] and a convenient [`Result`] alias.
//! Every variant is raised at configuration or spawn time; the tick loop itself never fails.

use std::fmt;

/// Main error type for the solver.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Sub-step count must be at least one.
    InvalidSubStepCount(u32),
    /// Update rate must be at least one tick per second.
    InvalidUpdateRate(u32),
    /// Particle radius must be finite and strictly positive.
    InvalidRadius(f32),
    /// Boundary radius must be finite and strictly positive.
    InvalidConstraint { radius: f32 },
    /// Response coefficient must lie in `(0, 1]`.
    InvalidResponseCoefficient(f32),
    /// A vector input (gravity, centre, position, velocity) contained NaN or infinity.
    NonFiniteVector(&'static str),
    /// Emitter radius range is empty or not strictly positive.
    InvalidRadiusRange { min: u32, max: u32 },
    /// No particle lives at the given index.
    ParticleNotFound(usize),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidSubStepCount(count) => {
                write!(f, "Invalid sub-step count: {count} (must be >= 1)")
            }
            Self::InvalidUpdateRate(rate) => {
                write!(f, "Invalid update rate: {rate} Hz (must be >= 1)")
            }
            Self::InvalidRadius(radius) => write!(f, "Invalid particle radius: {radius}"),
            Self::InvalidConstraint { radius } => {
                write!(f, "Invalid constraint radius: {radius}")
            }
            Self::InvalidResponseCoefficient(value) => {
                write!(f, "Invalid response coefficient: {value} (expected 0 < c <= 1)")
            }
            Self::NonFiniteVector(what) => write!(f, "Non-finite {what}"),
            Self::InvalidRadiusRange { min, max } => {
                write!(f, "Invalid emitter radius range: {min}..={max}")
            }
            Self::ParticleNotFound(index) => write!(f, "Particle not found: {index}"),
        }
    }
}

impl std::error::Error for SolverError {}

/// Convenient Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;
