use std::time::Instant;

use glam::Vec2;
use log::{debug, warn};

use crate::{
    collision::resolver::CollisionResolver,
    config::{SolverConfig, check_response_coefficient},
    core::{constraints::CircleConstraint, particle::Particle},
    dynamics::{forces::GravityForce, integrator::Integrator},
    error::{Result, SolverError},
    utils::{
        logging::{ScopedTimer, warn_if_frame_budget_exceeded},
        math::is_finite_vec,
        profiling::{ScopedTimer as PassTimer, StepProfiler},
    },
};

/// Owns every particle and advances them one fixed tick at a time.
///
/// Each [`Solver::update`] runs `sub_steps` iterations of gravity, collision
/// resolution, boundary projection and integration, in that order.
#[derive(Debug, Clone)]
pub struct Solver {
    particles: Vec<Particle>,
    gravity: GravityForce,
    integrator: Integrator,
    constraint: CircleConstraint,
    resolver: CollisionResolver,
    time: f32,
    profiler: StepProfiler,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;

        let solver = Self {
            particles: Vec::new(),
            gravity: GravityForce::new(config.gravity)?,
            integrator: Integrator::new(config.update_rate, config.sub_steps)?,
            constraint: CircleConstraint::new(config.constraint_center, config.constraint_radius)?,
            resolver: CollisionResolver::new(config.response_coefficient),
            time: 0.0,
            profiler: StepProfiler::default(),
        };
        debug!(
            "solver created: {} Hz, {} sub-steps, boundary {:?} r={}",
            config.update_rate, config.sub_steps, config.constraint_center, config.constraint_radius
        );
        Ok(solver)
    }

    pub fn set_simulation_update_rate(&mut self, rate: u32) -> Result<()> {
        self.integrator.set_update_rate(rate)?;
        debug!("update rate set to {rate} Hz");
        Ok(())
    }

    pub fn set_sub_steps_count(&mut self, sub_steps: u32) -> Result<()> {
        self.integrator.set_sub_steps(sub_steps)?;
        debug!("sub-step count set to {sub_steps}");
        Ok(())
    }

    pub fn set_constraint(&mut self, center: Vec2, radius: f32) -> Result<()> {
        self.constraint = CircleConstraint::new(center, radius)?;
        debug!("constraint set to {center:?} r={radius}");
        Ok(())
    }

    pub fn set_response_coefficient(&mut self, coefficient: f32) -> Result<()> {
        check_response_coefficient(coefficient)?;
        self.resolver.response_coefficient = coefficient;
        Ok(())
    }

    /// Appends a particle at rest and hands it back for further setup.
    pub fn add_particle(&mut self, position: Vec2, radius: f32) -> Result<&mut Particle> {
        let particle = Particle::new(position, radius)
            .inspect_err(|err| warn!("rejected particle spawn: {err}"))?;
        self.particles.push(particle);
        let index = self.particles.len() - 1;
        Ok(&mut self.particles[index])
    }

    /// Appends a particle moving at `velocity`, expressed against the sub-step `dt`.
    pub fn spawn(&mut self, position: Vec2, radius: f32, velocity: Vec2) -> Result<&mut Particle> {
        if !is_finite_vec(velocity) {
            return Err(SolverError::NonFiniteVector("particle velocity"));
        }
        let dt = self.step_dt();
        let particle = self.add_particle(position, radius)?;
        particle.set_velocity(velocity, dt);
        Ok(particle)
    }

    pub fn set_particle_velocity(&mut self, index: usize, velocity: Vec2) -> Result<()> {
        if !is_finite_vec(velocity) {
            return Err(SolverError::NonFiniteVector("particle velocity"));
        }
        let dt = self.step_dt();
        let particle = self
            .particles
            .get_mut(index)
            .ok_or(SolverError::ParticleNotFound(index))?;
        particle.set_velocity(velocity, dt);
        Ok(())
    }

    /// Advances the simulation by one outer tick.
    pub fn update(&mut self) {
        let _trace = ScopedTimer::new("solver::update");
        let frame_start = Instant::now();
        self.profiler.reset();

        self.time += self.integrator.frame_dt();
        let step_dt = self.integrator.step_dt();
        for _ in 0..self.integrator.sub_steps() {
            self.apply_gravity();
            self.resolve_collisions();
            self.apply_constraint();
            self.integrate_particles(step_dt);
        }

        self.profiler.total_frame_time = frame_start.elapsed();
        self.profiler.particle_count = self.particles.len();
        self.profiler.sub_steps = self.integrator.sub_steps();
        warn_if_frame_budget_exceeded(
            self.profiler.total_frame_time,
            self.integrator.frame_dt() * 1000.0,
        );
    }

    pub fn apply_gravity(&mut self) {
        let _timer = PassTimer::new(&mut self.profiler.gravity_time);
        self.gravity.apply(&mut self.particles);
    }

    pub fn resolve_collisions(&mut self) {
        let _timer = PassTimer::new(&mut self.profiler.collision_time);
        let stats = self.resolver.resolve(&mut self.particles);
        self.profiler.pairs_checked += stats.pairs_checked;
        self.profiler.contacts_resolved += stats.contacts_resolved;
    }

    pub fn apply_constraint(&mut self) {
        let _timer = PassTimer::new(&mut self.profiler.constraint_time);
        for particle in self.particles.iter_mut() {
            self.constraint.apply(particle);
        }
    }

    pub fn integrate_particles(&mut self, dt: f32) {
        let _timer = PassTimer::new(&mut self.profiler.integration_time);
        self.integrator.step(&mut self.particles, dt);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn constraint(&self) -> CircleConstraint {
        self.constraint
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity.gravity()
    }

    pub fn frame_dt(&self) -> f32 {
        self.integrator.frame_dt()
    }

    pub fn step_dt(&self) -> f32 {
        self.integrator.step_dt()
    }

    pub fn sub_steps(&self) -> u32 {
        self.integrator.sub_steps()
    }

    pub fn response_coefficient(&self) -> f32 {
        self.resolver.response_coefficient
    }

    /// Timings and counters from the most recent [`Solver::update`].
    pub fn profiler(&self) -> &StepProfiler {
        &self.profiler
    }

    /// Sum of squared implied velocities; drops towards zero as the pile settles.
    pub fn kinetic_energy_proxy(&self) -> f32 {
        let dt = self.step_dt();
        self.particles
            .iter()
            .map(|p| p.velocity(dt).length_squared())
            .sum()
    }
}
