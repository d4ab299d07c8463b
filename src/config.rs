//! Default configuration for the Verlet solver and the particle emitter.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SolverError};
use crate::utils::math::is_finite_vec;

/// Default gravity vector (screen coordinates, Y-down).
pub const DEFAULT_GRAVITY: [f32; 2] = [0.0, 1000.0];

/// Default number of outer ticks per second.
pub const DEFAULT_UPDATE_RATE: u32 = 60;

/// Default number of sub-steps per outer tick.
pub const DEFAULT_SUB_STEPS: u32 = 1;

/// Default boundary radius.
pub const DEFAULT_CONSTRAINT_RADIUS: f32 = 100.0;

/// Damping applied to overlap correction.
pub const DEFAULT_RESPONSE_COEFFICIENT: f32 = 0.75;

/// Settings a [`crate::Solver`] is built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub gravity: Vec2,
    pub update_rate: u32,
    pub sub_steps: u32,
    pub constraint_center: Vec2,
    pub constraint_radius: f32,
    pub response_coefficient: f32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::from_array(DEFAULT_GRAVITY),
            update_rate: DEFAULT_UPDATE_RATE,
            sub_steps: DEFAULT_SUB_STEPS,
            constraint_center: Vec2::ZERO,
            constraint_radius: DEFAULT_CONSTRAINT_RADIUS,
            response_coefficient: DEFAULT_RESPONSE_COEFFICIENT,
        }
    }
}

impl SolverConfig {
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_update_rate(mut self, update_rate: u32) -> Self {
        self.update_rate = update_rate;
        self
    }

    pub fn with_sub_steps(mut self, sub_steps: u32) -> Self {
        self.sub_steps = sub_steps;
        self
    }

    pub fn with_constraint(mut self, center: Vec2, radius: f32) -> Self {
        self.constraint_center = center;
        self.constraint_radius = radius;
        self
    }

    pub fn with_response_coefficient(mut self, coefficient: f32) -> Self {
        self.response_coefficient = coefficient;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !is_finite_vec(self.gravity) {
            return Err(SolverError::NonFiniteVector("gravity"));
        }
        if self.update_rate == 0 {
            return Err(SolverError::InvalidUpdateRate(self.update_rate));
        }
        if self.sub_steps == 0 {
            return Err(SolverError::InvalidSubStepCount(self.sub_steps));
        }
        if !is_finite_vec(self.constraint_center) {
            return Err(SolverError::NonFiniteVector("constraint center"));
        }
        if !(self.constraint_radius.is_finite() && self.constraint_radius > 0.0) {
            return Err(SolverError::InvalidConstraint {
                radius: self.constraint_radius,
            });
        }
        check_response_coefficient(self.response_coefficient)
    }
}

pub(crate) fn check_response_coefficient(value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(SolverError::InvalidResponseCoefficient(value))
    }
}

/// Settings for [`crate::spawner::Emitter`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub position: Vec2,
    pub max_particles: usize,
    /// Simulation seconds between spawns.
    pub spawn_delay: f32,
    pub min_radius: u32,
    pub max_radius: u32,
    pub initial_speed: f32,
    /// Amplitude of the launch angle sweep around straight down (radians).
    pub max_angle: f32,
    pub seed: u64,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            position: Vec2::new(500.0, 200.0),
            max_particles: 2000,
            spawn_delay: 0.01,
            min_radius: 3,
            max_radius: 9,
            initial_speed: 1000.0,
            max_angle: 1.0,
            seed: 1000,
        }
    }
}

impl EmitterConfig {
    pub fn validate(&self) -> Result<()> {
        if !is_finite_vec(self.position) {
            return Err(SolverError::NonFiniteVector("emitter position"));
        }
        if self.min_radius == 0 || self.min_radius > self.max_radius {
            return Err(SolverError::InvalidRadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if !(self.initial_speed.is_finite()
            && self.max_angle.is_finite()
            && self.spawn_delay.is_finite())
        {
            return Err(SolverError::NonFiniteVector("emitter launch parameters"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SolverConfig::default().validate().is_ok());
        assert!(EmitterConfig::default().validate().is_ok());
    }

    #[test]
    fn misuse_is_rejected() {
        let base = SolverConfig::default();
        assert_eq!(
            base.with_sub_steps(0).validate(),
            Err(SolverError::InvalidSubStepCount(0))
        );
        assert_eq!(
            base.with_update_rate(0).validate(),
            Err(SolverError::InvalidUpdateRate(0))
        );
        assert!(base.with_constraint(Vec2::ZERO, -1.0).validate().is_err());
        assert!(base.with_response_coefficient(0.0).validate().is_err());
        assert!(base.with_response_coefficient(1.5).validate().is_err());
        assert!(base
            .with_gravity(Vec2::new(f32::NAN, 0.0))
            .validate()
            .is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SolverConfig =
            serde_json::from_str(r#"{ "sub_steps": 8, "constraint_radius": 350.0 }"#).unwrap();
        assert_eq!(config.sub_steps, 8);
        assert_eq!(config.constraint_radius, 350.0);
        assert_eq!(config.update_rate, DEFAULT_UPDATE_RATE);
        assert_eq!(config.response_coefficient, DEFAULT_RESPONSE_COEFFICIENT);
    }

    #[test]
    fn emitter_radius_range_checked() {
        let config = EmitterConfig {
            min_radius: 9,
            max_radius: 3,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(SolverError::InvalidRadiusRange { min: 9, max: 3 })
        );
    }
}
