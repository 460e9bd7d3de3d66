use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PresentMode;

use crate::configuration::config::Rgb;
use crate::simulation::integrator::apply_interactivity;
use crate::simulation::scenario::Simulation;
use crate::simulation::states::as_pixel;

#[derive(Component)]
struct ParticleIndex {
    group: usize,
    index: usize,
}

pub fn run_viewer(sim: Simulation) {
    log::info!(
        "starting viewer: {} groups, {} particles",
        sim.groups.len(),
        sim.particle_count()
    );

    let window = Window {
        title: sim.display.title.clone(),
        resolution: (
            sim.parameters.arena_width as f32,
            sim.parameters.arena_height as f32,
        )
            .into(),
        resizable: false,
        present_mode: PresentMode::AutoVsync,
        ..Default::default()
    };

    let background = color_of(sim.display.background);
    let step_hz = sim.display.target_fps;

    App::new()
        .insert_resource(sim)
        .insert_resource(ClearColor(background))
        .insert_resource(Time::<Fixed>::from_hz(step_hz))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..Default::default()
                })
                // env_logger already owns the global logger
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_particles_system)
        .add_systems(
            FixedUpdate,
            (simulation_step_system, sync_transforms_system).chain(),
        )
        .run();
}

fn color_of(rgb: Rgb) -> Color {
    Color::rgb_u8(rgb.0, rgb.1, rgb.2)
}

/// Map arena coordinates (origin top-left, y down) to screen coordinates
/// (origin centered, y up). Groups get increasing z so draw order matches
/// the render pass.
fn to_screen(x: i32, y: i32, group: usize, sim: &Simulation) -> Vec3 {
    let half_w = sim.parameters.arena_width as f32 / 2.0;
    let half_h = sim.parameters.arena_height as f32 / 2.0;
    Vec3::new(x as f32 - half_w, half_h - y as f32, group as f32)
}

fn setup_particles_system(
    mut commands: Commands,
    sim: Res<Simulation>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // One circle mesh shared by every particle
    let mesh = Mesh2dHandle(meshes.add(Circle::new(sim.display.particle_radius)));

    for (g, group) in sim.groups.iter().enumerate() {
        let Some(first) = group.particles.first() else {
            continue; // empty group, nothing to draw
        };

        // One material per group; every member shares the group color
        let material = materials.add(ColorMaterial::from(color_of(first.color)));

        for (i, particle) in group.particles.iter().enumerate() {
            let (x, y) = as_pixel(particle.position);
            commands.spawn((
                MaterialMesh2dBundle {
                    mesh: mesh.clone(),
                    material: material.clone(),
                    transform: Transform::from_translation(to_screen(x, y, g, &sim)),
                    ..Default::default()
                },
                ParticleIndex { group: g, index: i },
            ));
        }
    }
}

fn simulation_step_system(mut sim: ResMut<Simulation>) {
    // Split &mut Simulation into &mut fields in one destructuring step
    let Simulation {
        groups,
        matrix,
        parameters,
        ..
    } = &mut *sim;

    apply_interactivity(groups, matrix, parameters);
}

fn sync_transforms_system(
    sim: Res<Simulation>,
    mut query: Query<(&ParticleIndex, &mut Transform)>,
) {
    for (idx, mut transform) in &mut query {
        if let Some(p) = sim
            .groups
            .get(idx.group)
            .and_then(|g| g.particles.get(idx.index))
        {
            let (x, y) = as_pixel(p.position);
            transform.translation = to_screen(x, y, idx.group, &sim);
        }
    }
}
