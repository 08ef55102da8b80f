//! Bevy 3D viewer for a generated scenario
//!
//! Thin glue around the core: owns the window, camera, and frame loop.
//! Startup spawns one wireframe UV-sphere per draw command; every frame the
//! physics system advances the scenario with the clock's delta, then the
//! sync system re-reads the registry and updates entity transforms. The two
//! run in a fixed update-then-draw order so the renderer never sees a
//! half-stepped registry.

use bevy::pbr::wireframe::{Wireframe, WireframePlugin};
use bevy::prelude::*;
use bevy::render::settings::{RenderCreation, WgpuFeatures, WgpuSettings};
use bevy::render::RenderPlugin;

use crate::simulation::integrator::euler_integrator;
use crate::simulation::scenario::Scenario;
use crate::visualization::render::draw_commands;

/// Component tagging each sphere with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Distance of the camera from the origin along +Z, in render units
const CAMERA_DISTANCE: f32 = 45.0;

/// Run the viewer until the window closes
pub fn run_viewer(scenario: Scenario) {
    log::info!("starting 3D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(scenario)
        .add_plugins((
            // Line polygon mode is needed for wireframe rendering
            DefaultPlugins.set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings {
                    features: WgpuFeatures::POLYGON_MODE_LINE,
                    ..Default::default()
                }),
                ..Default::default()
            }),
            WireframePlugin,
        ))
        .add_systems(Startup, setup_scene)
        .add_systems(Update, (physics_step, sync_transforms).chain())
        .run();
}

/// Startup system: spawn camera, light, and one wireframe sphere per body
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    // Simple 3D camera looking at the origin
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, -20.0, CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Z),
        ..Default::default()
    });

    // Basic point light
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE),
        ..Default::default()
    });

    // One wireframe sphere per draw command, tagged with its body index
    for (i, cmd) in draw_commands(&scenario.system.bodies, &scenario.draw)
        .iter()
        .enumerate()
    {
        // Ensure a minimum visual radius so tiny bodies are still visible
        let radius = cmd.radius.max(0.02);

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(radius).mesh().uv(cmd.slices, cmd.rings)),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(cmd.color[0], cmd.color[1], cmd.color[2]),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_xyz(cmd.center[0], cmd.center[1], cmd.center[2]),
                ..Default::default()
            },
            Wireframe,
            BodyIndex(i),
        ));
    }
}

/// Per-frame physics: one integration step with the clock's frame delta
fn physics_step(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    let Scenario {
        system, parameters, ..
    } = &mut *scenario;

    euler_integrator(system, parameters, time.delta_seconds() as f64);
}

/// Per-frame draw sync: map fresh registry state back onto entity transforms
fn sync_transforms(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let cmds = draw_commands(&scenario.system.bodies, &scenario.draw);

    for (BodyIndex(i), mut transform) in query.iter_mut() {
        if let Some(cmd) = cmds.get(*i) {
            transform.translation = Vec3::new(cmd.center[0], cmd.center[1], cmd.center[2]);
        }
    }
}
