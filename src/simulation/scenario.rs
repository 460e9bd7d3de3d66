//! Build a fully-initialized simulation from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Simulation`) containing:
//! - runtime parameters (`Parameters`) and display settings
//! - the particle groups, spawned at random positions
//! - the validated interactivity matrix
//!
//! The bundle is inserted into Bevy as a `Resource` and consumed by the
//! step and transform-sync systems; headless runs own it directly

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{ConfigError, ScenarioConfig};
use crate::simulation::driver::RenderSink;
use crate::simulation::integrator::apply_interactivity;
use crate::simulation::matrix::InteractivityMatrix;
use crate::simulation::params::{DisplaySettings, Parameters};
use crate::simulation::states::{as_pixel, ParticleGroup};

/// Bevy resource representing a fully-initialized simulation
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the runtime parameters, display settings, particle groups
/// and the interactivity matrix
///
/// In Bevy terms, this is inserted as a `Resource` and then read by the
/// systems responsible for stepping and drawing; the headless driver and
/// the benchmarks hold it as a plain value
#[derive(Resource)]
pub struct Simulation {
    pub parameters: Parameters,
    pub display: DisplaySettings,
    pub groups: Vec<ParticleGroup>,
    pub matrix: InteractivityMatrix,
}

impl Simulation {
    /// Validate `cfg` and build the runtime state, spawning every group
    /// from one RNG (seeded when the scenario fixes a seed)
    pub fn from_config(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Matrix: shape-checked against the group count
        let matrix = InteractivityMatrix::from_rows(&cfg.interactivity, cfg.groups.len())?;

        // Parameters (runtime) from the arena/physics sections
        let parameters = Parameters {
            arena_width: cfg.arena.width,
            arena_height: cfg.arena.height,
            velocity_factor: cfg.physics.velocity_factor,
            action_distance: cfg.physics.action_distance,
        };

        // Display settings pass through untouched
        let display = DisplaySettings {
            title: cfg.display.title,
            target_fps: cfg.display.target_fps,
            particle_radius: cfg.display.particle_radius,
            background: cfg.display.background,
        };

        // One RNG for the whole population, so a fixed seed reproduces runs
        let mut rng = match cfg.physics.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let groups: Vec<ParticleGroup> = cfg
            .groups
            .iter()
            .map(|g| {
                let count = g.count.unwrap_or(cfg.physics.particles_per_group);
                log::debug!("spawning group '{}' with {} particles", g.name, count);
                ParticleGroup::spawn(&mut rng, &parameters, g.color, count)
            })
            .collect();

        Ok(Self {
            parameters,
            display,
            groups,
            matrix,
        })
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        apply_interactivity(&mut self.groups, &self.matrix, &self.parameters);
    }

    /// Issue one draw request per particle to `sink`, in group order
    pub fn render(&self, sink: &mut dyn RenderSink) {
        for group in &self.groups {
            for particle in &group.particles {
                let (x, y) = as_pixel(particle.position);
                sink.draw_circle(x, y, self.display.particle_radius, particle.color);
            }
        }
    }

    pub fn particle_count(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }
}
