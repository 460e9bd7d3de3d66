//! Headless driving loop and its two ports
//!
//! The simulation draws through [`RenderSink`] and is stopped through
//! [`StopSignal`]; both are one-method traits so tests, benchmarks and the
//! headless binary can supply trivial implementations

use crate::configuration::config::Rgb;
use crate::simulation::scenario::Simulation;

/// Receiver for draw requests, one call per particle per tick
pub trait RenderSink {
    fn draw_circle(&mut self, x: i32, y: i32, radius: f32, color: Rgb);
}

/// Polled once per tick, before the step; `true` ends the run
pub trait StopSignal {
    fn should_stop(&mut self) -> bool;
}

/// Stop after a fixed number of ticks
pub struct TickLimit {
    remaining: u64,
}

impl TickLimit {
    pub fn new(ticks: u64) -> Self {
        Self { remaining: ticks }
    }
}

impl StopSignal for TickLimit {
    fn should_stop(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}

/// Sink that only counts draw requests
#[derive(Debug, Default)]
pub struct DrawTally {
    calls: u64,
}

impl DrawTally {
    pub fn calls(&self) -> u64 {
        self.calls
    }
}

impl RenderSink for DrawTally {
    fn draw_circle(&mut self, _x: i32, _y: i32, _radius: f32, _color: Rgb) {
        self.calls += 1;
    }
}

/// Run the simulation until `stop` fires: one step and one full render
/// pass per tick
pub fn run_simulation(sim: &mut Simulation, sink: &mut dyn RenderSink, stop: &mut dyn StopSignal) {
    while !stop.should_stop() {
        sim.step();
        sim.render(sink);
    }
}
