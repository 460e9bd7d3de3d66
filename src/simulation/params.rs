//! Runtime parameters for the simulation
//!
//! `Parameters` holds the settings the force pass reads every tick;
//! `DisplaySettings` carries the presentation-only values consumed by the
//! windowed viewer and the render pass

use crate::configuration::config::Rgb;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub arena_width: f64,     // arena extent along x
    pub arena_height: f64,    // arena extent along y
    pub velocity_factor: f64, // per-update velocity damping
    pub action_distance: f64, // interaction cutoff distance
}

#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub title: String,        // window title
    pub target_fps: f64,      // viewer step rate, Hz
    pub particle_radius: f32, // drawn circle radius
    pub background: Rgb,      // window clear color
}
