//! Core types describing particles, the boundary they live in, and shared data.

pub mod constraints;
pub mod particle;
pub mod types;

pub use constraints::CircleConstraint;
pub use particle::Particle;
pub use types::Color;
