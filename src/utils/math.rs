//! Additional math helpers layered on top of `glam`.

use glam::Vec2;

/// Distances below this are treated as coincident points.
pub const DEGENERATE_DISTANCE: f32 = 1e-6;

/// Direction used when two points coincide and no axis can be derived from them.
pub const FALLBACK_DIRECTION: Vec2 = Vec2::X;

/// Normalizes `vec` given its precomputed length, falling back to [`FALLBACK_DIRECTION`]
/// when the length is too small to divide by.
pub fn direction_or_fallback(vec: Vec2, dist: f32) -> Vec2 {
    if dist > DEGENERATE_DISTANCE {
        vec / dist
    } else {
        FALLBACK_DIRECTION
    }
}

pub fn is_finite_vec(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_regular_vectors() {
        let v = Vec2::new(3.0, 4.0);
        let dir = direction_or_fallback(v, v.length());
        assert!((dir - Vec2::new(0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn coincident_points_use_fallback() {
        assert_eq!(direction_or_fallback(Vec2::ZERO, 0.0), FALLBACK_DIRECTION);
        let tiny = Vec2::splat(1e-9);
        assert_eq!(direction_or_fallback(tiny, tiny.length()), FALLBACK_DIRECTION);
    }

    #[test]
    fn finiteness_check() {
        assert!(is_finite_vec(Vec2::new(1.0, -2.0)));
        assert!(!is_finite_vec(Vec2::new(f32::NAN, 0.0)));
        assert!(!is_finite_vec(Vec2::new(0.0, f32::INFINITY)));
    }
}
