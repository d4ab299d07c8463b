//! Verlet Solver – sub-stepped particle physics for Rust.
//!
//! A [`Solver`] owns a population of circular [`Particle`]s and advances them
//! with position Verlet under constant gravity, all-pairs overlap resolution,
//! and a circular boundary constraint. Rendering and windowing are left to the
//! host: after each [`Solver::update`] read [`Solver::particles`] and draw.
//!
//! ```
//! use verlet_solver::{Solver, SolverConfig, Vec2};
//!
//! let config = SolverConfig::default()
//!     .with_constraint(Vec2::new(500.0, 400.0), 350.0)
//!     .with_sub_steps(8);
//! let mut solver = Solver::new(config)?;
//! solver.spawn(Vec2::new(500.0, 200.0), 5.0, Vec2::new(0.0, 500.0))?;
//! solver.update();
//! assert_eq!(solver.particle_count(), 1);
//! # Ok::<(), verlet_solver::SolverError>(())
//! ```

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod solver;
pub mod spawner;
pub mod utils;

pub use glam::Vec2;

pub use collision::{CollisionResolver, CollisionStats};
pub use config::{EmitterConfig, SolverConfig};
pub use crate::core::{constraints::CircleConstraint, particle::Particle, types::Color};
pub use dynamics::{GravityForce, Integrator};
pub use error::{Result, SolverError};
pub use solver::Solver;
pub use spawner::Emitter;
pub use utils::profiling::StepProfiler;
