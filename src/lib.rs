pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{as_pixel, NVec2, Particle, ParticleGroup};
pub use simulation::forces::{separation, update_group_pair, Separation};
pub use simulation::integrator::apply_interactivity;
pub use simulation::matrix::InteractivityMatrix;
pub use simulation::params::{DisplaySettings, Parameters};
pub use simulation::scenario::Simulation;
pub use simulation::driver::{run_simulation, DrawTally, RenderSink, StopSignal, TickLimit};

pub use configuration::config::{ArenaConfig, ConfigError, DisplayConfig, GroupConfig, PhysicsConfig, Rgb, ScenarioConfig};

pub use visualization::viewer::run_viewer;

pub use benchmark::benchmark::{bench_step, bench_step_curve};
