use bevy::prelude::*;
use bevy::window::WindowResolution;

use orbit_hopper::config::{self, PhysicsConfig};
use orbit_hopper::graphics;
use orbit_hopper::menu::MainMenuPlugin;
use orbit_hopper::player;
use orbit_hopper::rendering;
use orbit_hopper::simulation::{self, SimulationPlugin};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Orbit Hopper".into(),
            resolution: WindowResolution::new(1200, 680),
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.06)))
    // Insert PhysicsConfig with compiled defaults; load_physics_config will
    // overwrite it from assets/physics.toml (if present) in the Startup schedule.
    .insert_resource(PhysicsConfig::default())
    // Registers GameState; must precede SimulationPlugin.
    .add_plugins(MainMenuPlugin)
    .add_plugins(SimulationPlugin)
    .add_systems(
        Startup,
        (
            // Load config first so every other startup system sees the final values.
            config::load_physics_config,
            simulation::init_simulation_state,
            graphics::setup_camera,
            rendering::setup_world_meshes,
            rendering::setup_hud,
            player::spawn_player,
        )
            .chain(),
    )
    .add_systems(Update, player::attach_player_ship_mesh_system);

    app.run();
}
