//! Simulation dynamics: gravity accumulation and Verlet time stepping.

pub mod forces;
pub mod integrator;

pub use forces::GravityForce;
pub use integrator::Integrator;
