use glam::Vec2;
use serde::Serialize;

use super::types::Color;
use crate::error::{Result, SolverError};
use crate::utils::math::is_finite_vec;

/// Circular particle advanced with position Verlet.
///
/// Velocity is never stored: it is implied by `position - position_previous`.
/// Use [`Particle::set_velocity`] to impart one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub position: Vec2,
    pub position_previous: Vec2,
    /// Force accumulator for the current sub-step, consumed by [`Particle::integrate`].
    pub acceleration: Vec2,
    pub color: Color,
    radius: f32,
}

impl Particle {
    /// Creates a particle at rest.
    pub fn new(position: Vec2, radius: f32) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SolverError::InvalidRadius(radius));
        }
        if !is_finite_vec(position) {
            return Err(SolverError::NonFiniteVector("particle position"));
        }

        Ok(Self {
            position,
            position_previous: position,
            acceleration: Vec2::ZERO,
            color: Color::default(),
            radius,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Advances one Störmer–Verlet step and clears the accumulator.
    pub fn integrate(&mut self, dt: f32) {
        let displacement = self.position - self.position_previous;
        self.position_previous = self.position;
        self.position += displacement + self.acceleration * dt * dt;
        self.acceleration = Vec2::ZERO;
    }

    /// Rewrites the previous position so the next step of length `dt` moves by `velocity * dt`.
    ///
    /// `dt` must be the sub-step duration the solver integrates with.
    pub fn set_velocity(&mut self, velocity: Vec2, dt: f32) {
        self.position_previous = self.position - velocity * dt;
    }

    pub fn accelerate(&mut self, acceleration: Vec2) {
        self.acceleration += acceleration;
    }

    pub fn displacement(&self) -> Vec2 {
        self.position - self.position_previous
    }

    /// Implicit velocity over a step of length `dt`; zero for non-positive `dt`.
    pub fn velocity(&self, dt: f32) -> Vec2 {
        if dt <= 0.0 {
            return Vec2::ZERO;
        }
        self.displacement() / dt
    }
}
