//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario plus its validation. A scenario consists of:
//!
//! - [`ArenaConfig`]    – arena extent in simulation units
//! - [`DisplayConfig`]  – window title, pacing and drawing values
//! - [`PhysicsConfig`]  – population size, damping, cutoff, optional seed
//! - [`GroupConfig`]    – one entry per particle group (name, color, count)
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! arena:
//!   width: 800.0
//!   height: 450.0
//!
//! display:
//!   title: "Particle Life"
//!   target_fps: 60.0
//!   particle_radius: 2.0
//!   background: [0, 0, 0]
//!
//! physics:
//!   particles_per_group: 300
//!   velocity_factor: 0.01
//!   action_distance: 75.0
//!   seed: 42             # optional, omit for a fresh population every run
//!
//! groups:
//!   - name: "red"
//!     color: [230, 41, 55]
//!   - name: "yellow"
//!     color: [253, 249, 0]
//!
//! interactivity:
//!   - [  0.02, -0.50 ]
//!   - [  0.02, -0.04 ]
//! ```
//!
//! `interactivity` must be square with one row per group: row `i`, column
//! `j` holds the gravity coefficient applied when group `i` responds to
//! group `j`. The shape itself is checked when the runtime matrix is built
//! from these rows.

use std::error::Error;
use std::fmt;

use serde::Deserialize;

/// 8-bit RGB color triple, written as `[r, g, b]` in YAML.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Arena extent in simulation units (pixels, for the shipped viewer)
#[derive(Deserialize, Debug, Clone)]
pub struct ArenaConfig {
    pub width: f64,  // arena width, must be positive
    pub height: f64, // arena height, must be positive
}

/// Presentation-only settings consumed by the windowed viewer
#[derive(Deserialize, Debug, Clone)]
pub struct DisplayConfig {
    pub title: String,        // window title
    pub target_fps: f64,      // simulation steps per second in the viewer
    pub particle_radius: f32, // drawn circle radius
    pub background: Rgb,      // window clear color
}

/// Population and force-law parameters
#[derive(Deserialize, Debug, Clone)]
pub struct PhysicsConfig {
    pub particles_per_group: usize, // default group size
    pub velocity_factor: f64,       // per-update velocity damping
    pub action_distance: f64,       // interaction cutoff distance
    pub seed: Option<u64>,          // deterministic seed to make runs reproducible
}

/// Configuration for a single particle group
#[derive(Deserialize, Debug, Clone)]
pub struct GroupConfig {
    pub name: String,         // label used in logs
    pub color: Rgb,           // color shared by every particle of the group
    pub count: Option<usize>, // overrides `particles_per_group` when set
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub arena: ArenaConfig,
    pub display: DisplayConfig,
    pub physics: PhysicsConfig,
    pub groups: Vec<GroupConfig>,     // one entry per group, matrix order
    pub interactivity: Vec<Vec<f64>>, // gravity coefficients, one row per source group
}

impl ScenarioConfig {
    /// Check the scalar fields. The matrix shape is checked separately when
    /// the runtime matrix is built from `interactivity`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.groups.is_empty() {
            return Err(ConfigError::NoGroups);
        }
        if !(self.arena.width > 0.0 && self.arena.width.is_finite())
            || !(self.arena.height > 0.0 && self.arena.height.is_finite())
        {
            return Err(ConfigError::InvalidArena {
                width: self.arena.width,
                height: self.arena.height,
            });
        }
        if !self.physics.velocity_factor.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "velocity_factor",
                value: self.physics.velocity_factor,
            });
        }
        if !self.physics.action_distance.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "action_distance",
                value: self.physics.action_distance,
            });
        }
        if !(self.display.target_fps > 0.0 && self.display.target_fps.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "target_fps",
                value: self.display.target_fps,
            });
        }
        if !(self.display.particle_radius > 0.0 && self.display.particle_radius.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "particle_radius",
                value: self.display.particle_radius as f64,
            });
        }
        Ok(())
    }
}

/// Errors raised while validating a scenario, before any simulation state
/// is constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The scenario declares no particle groups.
    NoGroups,
    /// The matrix row count does not match the group count.
    MatrixRows { groups: usize, rows: usize },
    /// One matrix row has the wrong number of entries.
    MatrixRowLength { row: usize, groups: usize, len: usize },
    /// A gravity coefficient is NaN or infinite.
    NonFiniteCoefficient { row: usize, col: usize },
    /// Arena extent is zero, negative or non-finite.
    InvalidArena { width: f64, height: f64 },
    /// A scalar parameter is outside its legal range.
    InvalidParameter { name: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoGroups => write!(f, "Scenario declares no particle groups"),
            ConfigError::MatrixRows { groups, rows } => write!(
                f,
                "Interactivity matrix needs one row per group: {} groups, {} rows",
                groups, rows
            ),
            ConfigError::MatrixRowLength { row, groups, len } => write!(
                f,
                "Interactivity row {} needs {} entries, found {}",
                row, groups, len
            ),
            ConfigError::NonFiniteCoefficient { row, col } => {
                write!(f, "Interactivity coefficient [{}][{}] is not finite", row, col)
            }
            ConfigError::InvalidArena { width, height } => {
                write!(f, "Arena needs positive finite extent, got {} x {}", width, height)
            }
            ConfigError::InvalidParameter { name, value } => {
                write!(f, "Parameter `{}` has invalid value {}", name, value)
            }
        }
    }
}

impl Error for ConfigError {}
