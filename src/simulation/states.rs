//! Core state types for the particle simulation.
//!
//! Defines the particle/group structs:
//! - `Particle` holds position, velocity and the color of its group
//! - `ParticleGroup` owns all same-colored particles of one group
//!
//! Groups are populated at startup with uniformly random positions and
//! zero velocity, then mutated in place every tick.

use nalgebra::Vector2;
use rand::Rng;

use crate::configuration::config::Rgb;
use crate::simulation::params::Parameters;

pub type NVec2 = Vector2<f64>;

/// Convert a position to integer pixel coordinates.
/// Truncates toward zero, no rounding: `(3.9, -1.7)` maps to `(3, -1)`.
pub fn as_pixel(position: NVec2) -> (i32, i32) {
    (position.x as i32, position.y as i32)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: NVec2, // position in arena coordinates
    pub velocity: NVec2, // velocity per tick
    pub color: Rgb,      // group color
}

impl Particle {
    /// Create a particle at a uniformly random position inside the arena,
    /// at rest.
    pub fn spawn<R: Rng>(rng: &mut R, params: &Parameters, color: Rgb) -> Self {
        Self {
            position: NVec2::new(
                rng.gen_range(0.0..params.arena_width),
                rng.gen_range(0.0..params.arena_height),
            ),
            velocity: NVec2::zeros(),
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleGroup {
    pub particles: Vec<Particle>, // same-colored particles, display order
}

impl ParticleGroup {
    /// Populate a group of `count` particles sharing one color.
    pub fn spawn<R: Rng>(rng: &mut R, params: &Parameters, color: Rgb, count: usize) -> Self {
        let particles = (0..count)
            .map(|_| Particle::spawn(rng, params, color))
            .collect();
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
