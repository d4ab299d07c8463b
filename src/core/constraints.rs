use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::particle::Particle;
use crate::error::{Result, SolverError};
use crate::utils::math::{direction_or_fallback, is_finite_vec};

/// Circular region every particle is confined to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleConstraint {
    pub center: Vec2,
    pub radius: f32,
}

impl CircleConstraint {
    pub fn new(center: Vec2, radius: f32) -> Result<Self> {
        let constraint = Self { center, radius };
        constraint.validate()?;
        Ok(constraint)
    }

    pub fn validate(&self) -> Result<()> {
        if !is_finite_vec(self.center) {
            return Err(SolverError::NonFiniteVector("constraint center"));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SolverError::InvalidConstraint {
                radius: self.radius,
            });
        }
        Ok(())
    }

    /// Furthest a particle's centre may sit from the constraint centre.
    ///
    /// Particles larger than the boundary get zero and are pinned to the centre.
    pub fn allowed_distance(&self, particle_radius: f32) -> f32 {
        (self.radius - particle_radius).max(0.0)
    }

    /// Projects the particle back inside the boundary. Returns `true` if it moved.
    ///
    /// Only `position` is touched, so the Verlet step that follows loses the
    /// outward component of the implied velocity.
    pub fn apply(&self, particle: &mut Particle) -> bool {
        let to_center = self.center - particle.position;
        let dist = to_center.length();
        let allowed = self.allowed_distance(particle.radius());
        if dist <= allowed {
            return false;
        }

        let n = direction_or_fallback(to_center, dist);
        particle.position = self.center - n * allowed;
        true
    }

    pub fn contains(&self, particle: &Particle, epsilon: f32) -> bool {
        particle.position.distance(self.center) <= self.allowed_distance(particle.radius()) + epsilon
    }
}
