use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Common math types re-exported for convenience.
pub use glam::Vec2;

/// Hue cycling speed used by [`Color::rainbow`], in cycles per unit of input.
pub const RAINBOW_FREQUENCY: f32 = 0.3;

/// 8-bit RGBA colour tag carried by particles for presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Smoothly cycling rainbow colour; three sine waves a third of a period apart.
    pub fn rainbow(value: f32) -> Self {
        let phase = TAU * RAINBOW_FREQUENCY * value;
        let channel = |offset: f32| ((phase + offset).sin() + 1.0) * 127.5;
        Self::rgb(
            channel(0.0) as u8,
            channel(TAU / 3.0) as u8,
            channel(2.0 * TAU / 3.0) as u8,
        )
    }
}
