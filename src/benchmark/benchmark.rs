use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::Rgb;
use crate::simulation::matrix::InteractivityMatrix;
use crate::simulation::params::{DisplaySettings, Parameters};
use crate::simulation::scenario::Simulation;
use crate::simulation::states::ParticleGroup;

// Colors for the benchmark groups, cycled when there are more groups
const PALETTE: [Rgb; 4] = [
    Rgb(230, 41, 55),
    Rgb(253, 249, 0),
    Rgb(0, 121, 241),
    Rgb(0, 228, 48),
];

/// Helper to build a Simulation with `group_count` groups of `per_group`
/// particles each, seeded so repeated runs time the same workload
fn make_simulation(group_count: usize, per_group: usize) -> Simulation {
    let parameters = Parameters {
        arena_width: 800.0,
        arena_height: 450.0,
        velocity_factor: 0.01,
        action_distance: 75.0,
    };

    let display = DisplaySettings {
        title: String::from("bench"),
        target_fps: 60.0,
        particle_radius: 2.0,
        background: Rgb(0, 0, 0),
    };

    let mut rng = StdRng::seed_from_u64(42);
    let groups = (0..group_count)
        .map(|g| ParticleGroup::spawn(&mut rng, &parameters, PALETTE[g % PALETTE.len()], per_group))
        .collect();

    Simulation {
        parameters,
        display,
        groups,
        matrix: InteractivityMatrix::uniform(group_count, 0.02),
    }
}

/// Time one tick across a range of population sizes
pub fn bench_step() {
    // Different per-group sizes to test (3 groups each)
    let ns = [50, 100, 200, 400, 800];
    let steps = 5; // ticks per measurement

    for n in ns {
        let mut sim = make_simulation(3, n);

        // Warm up
        sim.step();

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step();
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!(
            "per group = {n:5}, particles = {:5}, step = {:8.6} s",
            sim.particle_count(),
            per_step
        );
    }
}

/// Benchmark one tick for a range of population sizes
/// Paste output directly into excel to graph
pub fn bench_step_curve() {
    println!("per_group,tick_ms");

    // Steps of 50 to give a smoother graph
    for n in (50..=1600).step_by(50) {
        // Small n: average over a few ticks to smooth noise
        // Large n: only 1 tick to avoid minutes of runtime
        let steps = if n <= 400 { 5 } else { 1 };

        let mut sim = make_simulation(3, n);

        // Warm-up one tick
        sim.step();

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step();
        }
        let elapsed = t0.elapsed().as_secs_f64() * 1000.0; // ms total
        let ms = elapsed / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
