//! Player ship rendering: a filled dart mesh placed at the camera point plus
//! the banking offset, rotated to the ship's facing.

use super::state::Player;
use crate::graphics::{angle_to_render, world_to_render};
use crate::rendering::filled_polygon_mesh;
use crate::simulation::SimulationState;
use bevy::prelude::*;

/// Draw order of the ship: above planets and stars.
const SHIP_Z: f32 = 2.0;

// ── Ship geometry ─────────────────────────────────────────────────────────────

/// Local-space vertices of the ship polygon (dart / arrowhead shape), scaled
/// to span `size` nose to tail.
///
/// The nose points along local +X so a zero facing angle draws pointing right.
pub fn ship_vertices(size: f32) -> Vec<Vec2> {
    let s = size / 24.0;
    vec![
        Vec2::new(12.0, 0.0) * s,  // nose
        Vec2::new(-8.0, 8.0) * s,  // left fin tip
        Vec2::new(-4.0, 3.0) * s,  // left fin inner
        Vec2::new(-10.0, 0.0) * s, // tail notch
        Vec2::new(-4.0, -3.0) * s, // right fin inner
        Vec2::new(-8.0, -8.0) * s, // right fin tip
    ]
}

// ── Spawn-time mesh attachment ────────────────────────────────────────────────

/// Attach a filled `Mesh2d` dart to the player ship on spawn.
///
/// Runs only once per player entity (via [`Added<Player>`]).
pub fn attach_player_ship_mesh_system(
    mut commands: Commands,
    query: Query<Entity, Added<Player>>,
    sim: Res<SimulationState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for entity in query.iter() {
        let mesh_handle = meshes.add(filled_polygon_mesh(&ship_vertices(sim.ship.size)));
        let mat_handle = materials.add(ColorMaterial::from_color(Color::srgb(0.85, 0.92, 1.0)));
        commands
            .entity(entity)
            .insert((Mesh2d(mesh_handle), MeshMaterial2d(mat_handle)));
    }
}

// ── Per-frame sync ────────────────────────────────────────────────────────────

/// Move the ship sprite onto `camera.smooth + offset` and turn it to the
/// ship's facing.
pub fn sync_ship_sprite_system(
    sim: Res<SimulationState>,
    mut q_ship: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut transform) = q_ship.single_mut() else {
        return;
    };
    let p = world_to_render(sim.ship_screen_anchor());
    transform.translation = p.extend(SHIP_Z);
    transform.rotation = Quat::from_rotation_z(angle_to_render(sim.ship.angle));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;

    #[test]
    fn dart_spans_ship_size() {
        let verts = ship_vertices(48.0);
        let min_x = verts.iter().map(|v| v.x).fold(f32::INFINITY, f32::min);
        let max_x = verts.iter().map(|v| v.x).fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(max_x - min_x, 44.0);
        assert_eq!(verts[0], Vec2::new(24.0, 0.0));
    }

    #[test]
    fn sprite_follows_camera_plus_offset() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        let config = PhysicsConfig {
            star_count: 0,
            ..PhysicsConfig::default()
        };
        let mut sim = SimulationState::with_seed(&config, 1);
        sim.camera.smooth = Vec2::new(100.0, 200.0);
        sim.ship.offset = Vec2::new(10.0, -5.0);
        sim.ship.angle = std::f32::consts::FRAC_PI_2;
        app.insert_resource(sim);
        let ship = app.world_mut().spawn((Player, Transform::default())).id();
        app.add_systems(Update, sync_ship_sprite_system);

        app.update();

        let transform = app.world().get::<Transform>(ship).unwrap();
        assert_eq!(transform.translation, Vec3::new(110.0, -195.0, SHIP_Z));
        // Facing +Y in world (down on screen) is -90° in render space.
        let (axis, angle) = transform.rotation.to_axis_angle();
        assert!((axis.z * angle + std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }
}
