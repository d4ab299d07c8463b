use crate::core::particle::Particle;
use crate::error::{Result, SolverError};

/// Fixed outer tick split into equal Verlet sub-steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    frame_dt: f32,
    sub_steps: u32,
}

impl Integrator {
    pub fn new(update_rate: u32, sub_steps: u32) -> Result<Self> {
        Ok(Self {
            frame_dt: Self::frame_dt_for(update_rate)?,
            sub_steps: Self::check_sub_steps(sub_steps)?,
        })
    }

    pub fn set_update_rate(&mut self, update_rate: u32) -> Result<()> {
        self.frame_dt = Self::frame_dt_for(update_rate)?;
        Ok(())
    }

    pub fn set_sub_steps(&mut self, sub_steps: u32) -> Result<()> {
        self.sub_steps = Self::check_sub_steps(sub_steps)?;
        Ok(())
    }

    pub fn frame_dt(&self) -> f32 {
        self.frame_dt
    }

    pub fn sub_steps(&self) -> u32 {
        self.sub_steps
    }

    pub fn step_dt(&self) -> f32 {
        self.frame_dt / self.sub_steps as f32
    }

    pub fn step(&self, particles: &mut [Particle], dt: f32) {
        for particle in particles.iter_mut() {
            particle.integrate(dt);
        }
    }

    fn frame_dt_for(update_rate: u32) -> Result<f32> {
        if update_rate == 0 {
            return Err(SolverError::InvalidUpdateRate(update_rate));
        }
        Ok(1.0 / update_rate as f32)
    }

    fn check_sub_steps(sub_steps: u32) -> Result<u32> {
        if sub_steps == 0 {
            return Err(SolverError::InvalidSubStepCount(sub_steps));
        }
        Ok(sub_steps)
    }
}
