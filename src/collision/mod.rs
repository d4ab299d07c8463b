//! Collision response between particles.

pub mod resolver;

pub use resolver::{CollisionResolver, CollisionStats};
