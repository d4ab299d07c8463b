use crate::config::DEFAULT_RESPONSE_COEFFICIENT;
use crate::core::particle::Particle;
use crate::utils::math::direction_or_fallback;

/// Counters produced by one collision pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollisionStats {
    pub pairs_checked: usize,
    pub contacts_resolved: usize,
}

/// All-pairs circle overlap resolver.
///
/// Pairs are visited as `(i, k)` with `i < k` in storage order and corrected in
/// place, so later pairs see the corrections of earlier ones within the pass.
#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver {
    pub response_coefficient: f32,
}

impl Default for CollisionResolver {
    fn default() -> Self {
        Self::new(DEFAULT_RESPONSE_COEFFICIENT)
    }
}

impl CollisionResolver {
    pub fn new(response_coefficient: f32) -> Self {
        Self {
            response_coefficient,
        }
    }

    pub fn resolve(&self, particles: &mut [Particle]) -> CollisionStats {
        let mut stats = CollisionStats::default();
        let count = particles.len();

        for i in 0..count {
            for k in (i + 1)..count {
                stats.pairs_checked += 1;
                let (first, second) = pair_mut(particles, i, k);
                if self.resolve_pair(first, second) {
                    stats.contacts_resolved += 1;
                }
            }
        }

        stats
    }

    /// Separates two overlapping particles along their centre axis.
    ///
    /// The correction is split by radius ratio so the larger particle moves less.
    pub fn resolve_pair(&self, first: &mut Particle, second: &mut Particle) -> bool {
        let axis = first.position - second.position;
        let dist = axis.length();
        let combined_radius = first.radius() + second.radius();
        if dist >= combined_radius {
            return false;
        }

        let direction = direction_or_fallback(axis, dist);
        let first_ratio = first.radius() / combined_radius;
        let second_ratio = second.radius() / combined_radius;
        let delta = 0.5 * self.response_coefficient * (dist - combined_radius);

        first.position -= direction * second_ratio * delta;
        second.position += direction * first_ratio * delta;
        true
    }
}

/// Mutable access to two distinct particles, `i < k`.
fn pair_mut(particles: &mut [Particle], i: usize, k: usize) -> (&mut Particle, &mut Particle) {
    debug_assert!(i < k);
    let (head, tail) = particles.split_at_mut(k);
    (&mut head[i], &mut tail[0])
}
