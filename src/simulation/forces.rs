//! Pairwise force pass for the particle simulation
//!
//! Defines the separation helper and `update_group_pair`, the update
//! applied to every ordered (source, target) group pair each tick. This is
//! the behavioral core: the exact order of force accumulation, damping,
//! movement and bouncing below determines every trajectory.

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, ParticleGroup};

/// Relative placement of two particles
pub struct Separation {
    pub delta: NVec2,      // a.position - b.position
    pub displacement: f64, // Euclidean distance |delta|
}

/// Compute the displacement vector and distance from `b` to `a`
/// `displacement` is zero exactly when both particles share a position,
/// including comparing a particle with itself
pub fn separation(a: &Particle, b: &Particle) -> Separation {
    let delta = a.position - b.position;
    Separation {
        delta,
        displacement: delta.norm(),
    }
}

/// Update every particle of `groups[source]` against the particles of
/// `groups[target]`, in place
///
/// `source` and `target` may be equal; index-based access lets the
/// self-pair case read the same storage it mutates
pub fn update_group_pair(
    groups: &mut [ParticleGroup],
    source: usize,
    target: usize,
    gravity: f64,
    params: &Parameters,
) {
    // Hoist the lengths; the populations themselves never grow or shrink
    let source_len = groups[source].len();
    let target_len = groups[target].len();

    for i in 0..source_len {
        // Force accumulated so far for source particle i
        let mut fx = 0.0;
        let mut fy = 0.0;

        for j in 0..target_len {
            // Read the CURRENT state of both particles: earlier j-iterations
            // already moved particle i, and when source == target, earlier
            // i-iterations already moved particle j
            let sep = separation(&groups[source].particles[i], &groups[target].particles[j]);

            // Coincident pairs (including a particle against itself) and
            // pairs at or beyond the cutoff contribute nothing
            if sep.displacement > 0.0 && sep.displacement < params.action_distance {
                // Force falls off as 1/distance. delta points from the
                // target toward the source, so a positive coefficient
                // accumulates force AWAY from the target and a negative
                // one pulls the source in
                let force = gravity / sep.displacement;
                fx += force * sep.delta.x;
                fy += force * sep.delta.y;
            }

            let a = &mut groups[source].particles[i];

            // Velocity is updated once per target visited, not once per
            // pass, using the force accumulated so far. The two axes
            // deliberately use different rules: x adds the accumulated
            // force, y multiplies by it. The emergent patterns of tuned
            // scenarios depend on this exact pairing
            a.velocity.x = (a.velocity.x + fx) * params.velocity_factor;
            a.velocity.y = (a.velocity.y * fy) * params.velocity_factor;

            // Move immediately, so particle i advances once per target
            // visited within a single pass
            a.position += a.velocity;

            // Bounce: flip the velocity sign while a coordinate sits
            // strictly outside the arena. The position is left where it
            // landed; exactly on a bound does not count as outside
            if a.position.x < 0.0 || a.position.x > params.arena_width {
                a.velocity.x *= -1.0;
            }
            if a.position.y < 0.0 || a.position.y > params.arena_height {
                a.velocity.y *= -1.0;
            }
        }
    }
}
