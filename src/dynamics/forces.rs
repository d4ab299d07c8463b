use glam::Vec2;

use crate::core::particle::Particle;
use crate::error::{Result, SolverError};
use crate::utils::math::is_finite_vec;

/// Constant acceleration applied to every particle each sub-step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityForce {
    gravity: Vec2,
}

impl GravityForce {
    pub fn new(gravity: Vec2) -> Result<Self> {
        if !is_finite_vec(gravity) {
            return Err(SolverError::NonFiniteVector("gravity"));
        }
        Ok(Self { gravity })
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn apply(&self, particles: &mut [Particle]) {
        for particle in particles.iter_mut() {
            particle.accelerate(self.gravity);
        }
    }
}
