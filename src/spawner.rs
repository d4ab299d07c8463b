//! Timed particle emitter driven by simulation time.
//!
//! Radii are drawn from a seeded RNG, so two emitters built from the same
//! [`EmitterConfig`] feed identical particles into identical solvers.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use log::trace;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{config::EmitterConfig, core::types::Color, error::Result, solver::Solver};

pub struct Emitter {
    config: EmitterConfig,
    rng: StdRng,
    last_spawn: Option<f32>,
}

impl Emitter {
    pub fn new(config: EmitterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            last_spawn: None,
        })
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Launch direction at simulation time `t`: sweeps around straight down (+Y).
    pub fn launch_direction(&self, t: f32) -> Vec2 {
        let angle = self.config.max_angle * t.sin() + FRAC_PI_2;
        Vec2::new(angle.cos(), angle.sin())
    }

    /// Spawns at most one particle if the count limit and spawn delay allow it.
    ///
    /// Call between solver updates. Returns the index of the new particle.
    pub fn tick(&mut self, solver: &mut Solver) -> Result<Option<usize>> {
        if solver.particle_count() >= self.config.max_particles {
            return Ok(None);
        }

        let t = solver.time();
        if let Some(last) = self.last_spawn {
            if t - last < self.config.spawn_delay {
                return Ok(None);
            }
        }

        let radius = self
            .rng
            .random_range(self.config.min_radius..=self.config.max_radius) as f32;
        let velocity = self.launch_direction(t) * self.config.initial_speed;

        let particle = solver.spawn(self.config.position, radius, velocity)?;
        particle.color = Color::rainbow(t);
        self.last_spawn = Some(t);

        let index = solver.particle_count() - 1;
        trace!("emitted particle {index} r={radius} at t={t:.3}");
        Ok(Some(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;

    fn solver() -> Solver {
        Solver::new(
            SolverConfig::default()
                .with_constraint(Vec2::new(500.0, 400.0), 350.0)
                .with_sub_steps(8),
        )
        .unwrap()
    }

    #[test]
    fn first_tick_spawns_immediately() {
        let mut s = solver();
        let mut emitter = Emitter::new(EmitterConfig::default()).unwrap();
        assert_eq!(emitter.tick(&mut s).unwrap(), Some(0));
        assert_eq!(s.particle_count(), 1);

        let p = &s.particles()[0];
        assert!((3.0..=9.0).contains(&p.radius()));
        assert_eq!(p.position, Vec2::new(500.0, 200.0));
        // t = 0 launches straight down
        assert!(p.displacement().y > 0.0);
        assert!(p.displacement().x.abs() < 1e-4);
    }

    #[test]
    fn spawn_delay_is_measured_in_simulation_time() {
        let mut s = solver();
        let mut emitter = Emitter::new(EmitterConfig {
            spawn_delay: 0.05,
            ..Default::default()
        })
        .unwrap();

        assert!(emitter.tick(&mut s).unwrap().is_some());
        assert!(emitter.tick(&mut s).unwrap().is_none());
        for _ in 0..4 {
            s.update();
        }
        assert!(emitter.tick(&mut s).unwrap().is_some());
        assert_eq!(s.particle_count(), 2);
    }

    #[test]
    fn stops_at_max_particles() {
        let mut s = solver();
        let mut emitter = Emitter::new(EmitterConfig {
            max_particles: 3,
            spawn_delay: 0.0,
            ..Default::default()
        })
        .unwrap();

        for _ in 0..10 {
            emitter.tick(&mut s).unwrap();
            s.update();
        }
        assert_eq!(s.particle_count(), 3);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = EmitterConfig {
            min_radius: 0,
            ..Default::default()
        };
        assert!(Emitter::new(config).is_err());
    }
}
