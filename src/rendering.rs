//! World and HUD rendering: planet and star meshes, score HUD, debug readout,
//! and the pause overlay.
//!
//! ## Layer Model
//!
//! | Layer              | Technology   | z    | Source                     |
//! |--------------------|--------------|------|----------------------------|
//! | Planet discs       | `Mesh2d`     | 0.0  | `SimulationState::bodies`  |
//! | Planet surface mark| `Mesh2d`     | 0.1  | child of the planet disc   |
//! | Stars              | `Mesh2d`     | 1.0  | `SimulationState::stars`   |
//! | Player ship        | `Mesh2d`     | 2.0  | see [`crate::player::rendering`] |
//! | Score HUD          | Bevy UI      | n/a  | top-left                   |
//! | Debug readout      | Bevy UI      | n/a  | top-right                  |
//! | Pause overlay      | Bevy UI      | n/a  | centred, visible while paused |
//!
//! ## System Responsibilities
//!
//! | System                        | Schedule | Purpose                             |
//! |-------------------------------|----------|-------------------------------------|
//! | `setup_world_meshes`          | Startup  | Spawn planet and star mesh entities |
//! | `setup_hud`                   | Startup  | Spawn score, readout, pause nodes   |
//! | `sync_planet_sprites_system`  | Update   | Planet position and spin            |
//! | `sync_star_sprites_system`    | Update   | Star positions after pickups        |
//! | `hud_score_display_system`    | Update   | Refresh score text                  |
//! | `coordinates_display_system`  | Update   | Refresh debug readout text          |
//! | `sync_pause_overlay_system`   | Update   | Show/hide pause overlay             |

use crate::config::PhysicsConfig;
use crate::graphics::{angle_to_render, world_to_render};
use crate::simulation::SimulationState;
use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::{Indices, PrimitiveTopology};

const PLANET_Z: f32 = 0.0;
const STAR_Z: f32 = 1.0;

// ── Component markers ─────────────────────────────────────────────────────────

/// Draws `SimulationState::bodies[index]`.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlanetSprite {
    pub index: usize,
}

/// Draws `SimulationState::stars.stars()[index]`.
#[derive(Component, Debug, Clone, Copy)]
pub struct StarSprite {
    pub index: usize,
}

/// Marker for the permanent score HUD node.
#[derive(Component)]
pub struct HudScoreDisplay;

/// Marker for the top-right camera / ship readout.
#[derive(Component)]
pub struct CoordinatesDisplay;

/// Marker for the pause overlay root node.
#[derive(Component)]
pub struct PauseOverlay;

// ── Geometry helpers ──────────────────────────────────────────────────────────

/// Fan-triangulate a convex polygon into a renderable [`Mesh`].
///
/// Triangle fan from vertex 0: triangles `(0, i, i+1)` for `i ∈ 1..n-2`.
/// Valid for any convex polygon; the ship dart is drawn with it too since its
/// fan from the nose stays inside the outline.
pub fn filled_polygon_mesh(vertices: &[Vec2]) -> Mesh {
    let n = vertices.len();
    debug_assert!(n >= 3, "polygon must have ≥ 3 vertices");

    let positions: Vec<[f32; 3]> = vertices.iter().map(|v| [v.x, v.y, 0.0]).collect();
    let normals: Vec<[f32; 3]> = vec![[0.0, 0.0, 1.0]; n];
    // Map ±50 local units to roughly 0–1 UV range.
    let uvs: Vec<[f32; 2]> = vertices
        .iter()
        .map(|v| [(v.x / 100.0) + 0.5, (v.y / 100.0) + 0.5])
        .collect();

    let mut indices: Vec<u32> = Vec::with_capacity(n.saturating_sub(2) * 3);
    for i in 1..(n as u32).saturating_sub(1) {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Approximate a disc as a regular N-gon polygon mesh.
pub fn disc_mesh(radius: f32, segments: usize) -> Mesh {
    let verts: Vec<Vec2> = (0..segments)
        .map(|i| {
            let angle = (i as f32) * std::f32::consts::TAU / (segments as f32);
            Vec2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect();
    filled_polygon_mesh(&verts)
}

/// Earthy planet fill picked by index so neighbours differ.
fn planet_color(index: usize) -> Color {
    const PALETTE: [(f32, f32, f32); 4] = [
        (0.22, 0.42, 0.68),
        (0.62, 0.36, 0.24),
        (0.34, 0.56, 0.32),
        (0.52, 0.44, 0.62),
    ];
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    Color::srgb(r, g, b)
}

// ── Startup: world meshes ─────────────────────────────────────────────────────

/// Spawn one disc per planet (plus a surface mark that makes spin visible)
/// and one small disc per star.
///
/// Must be ordered after [`crate::simulation::init_simulation_state`].
pub fn setup_world_meshes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    sim: Res<SimulationState>,
) {
    let mark_mat = materials.add(ColorMaterial::from_color(Color::srgba(1.0, 1.0, 1.0, 0.6)));
    for (index, body) in sim.bodies.iter().enumerate() {
        let radius = body.radius();
        let mesh = meshes.add(disc_mesh(radius, 64));
        let mat = materials.add(ColorMaterial::from_color(planet_color(index)));
        let mark = meshes.add(disc_mesh(radius * 0.12, 16));
        commands
            .spawn((
                Mesh2d(mesh),
                MeshMaterial2d(mat),
                Transform::from_translation(world_to_render(body.position()).extend(PLANET_Z)),
                PlanetSprite { index },
            ))
            .with_children(|planet| {
                planet.spawn((
                    Mesh2d(mark),
                    MeshMaterial2d(mark_mat.clone()),
                    Transform::from_xyz(radius * 0.75, 0.0, 0.1),
                ));
            });
    }

    let star_mesh = meshes.add(disc_mesh(sim.stars.radius, 12));
    let star_mat = materials.add(ColorMaterial::from_color(Color::srgb(1.0, 0.9, 0.3)));
    for (index, star) in sim.stars.stars().iter().enumerate() {
        commands.spawn((
            Mesh2d(star_mesh.clone()),
            MeshMaterial2d(star_mat.clone()),
            Transform::from_translation(world_to_render(star.position).extend(STAR_Z)),
            StarSprite { index },
        ));
    }

    info!(
        "World meshes spawned: {} planets, {} stars",
        sim.bodies.len(),
        sim.stars.len()
    );
}

// ── Startup: HUD ──────────────────────────────────────────────────────────────

/// Spawn the score HUD (top-left), debug readout (top-right), and the hidden
/// pause overlay.
pub fn setup_hud(mut commands: Commands, config: Res<PhysicsConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            HudScoreDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(score_label(0)),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.88, 0.45)),
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            CoordinatesDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: config.hud_font_size * 0.8,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
            ));
        });

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            Visibility::Hidden,
            PauseOverlay,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("PAUSED"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            root.spawn((
                Text::new("Press T to Resume"),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::srgb(0.75, 0.75, 0.8)),
            ));
        });
}

// ── Text formatting ───────────────────────────────────────────────────────────

pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

/// Camera, ship, boost and horizontal speed, rounded to whole units.
pub fn debug_readout(sim: &SimulationState) -> String {
    format!(
        "Camera: ({:.0}, {:.0})\nShip: ({:.0}, {:.0})\nBoost: {:.0}\nVx: {:.0}",
        sim.camera.smooth.x,
        sim.camera.smooth.y,
        sim.ship.position.x,
        sim.ship.position.y,
        sim.ship.boost,
        sim.ship.velocity.x,
    )
}

/// Overwrite the text of every child of the matched roots.
fn write_child_text<F: QueryFilter>(
    roots: &Query<&Children, F>,
    texts: &mut Query<&mut Text>,
    value: &str,
) {
    for children in roots.iter() {
        for child in children.iter() {
            if let Ok(mut text) = texts.get_mut(child) {
                if text.0 != value {
                    text.0 = value.to_string();
                }
            }
        }
    }
}

// ── Update: world sync ────────────────────────────────────────────────────────

/// Move each planet disc onto its body and turn it by the body's orientation.
pub fn sync_planet_sprites_system(
    sim: Res<SimulationState>,
    mut query: Query<(&PlanetSprite, &mut Transform)>,
) {
    for (sprite, mut transform) in query.iter_mut() {
        let Some(body) = sim.bodies.get(sprite.index) else {
            continue;
        };
        transform.translation = world_to_render(body.position()).extend(PLANET_Z);
        transform.rotation = Quat::from_rotation_z(angle_to_render(body.orientation));
    }
}

/// Move star discs to their current positions; hide any sprite without a star.
pub fn sync_star_sprites_system(
    sim: Res<SimulationState>,
    mut query: Query<(&StarSprite, &mut Transform, &mut Visibility)>,
) {
    let stars = sim.stars.stars();
    for (sprite, mut transform, mut visibility) in query.iter_mut() {
        match stars.get(sprite.index) {
            Some(star) => {
                transform.translation = world_to_render(star.position).extend(STAR_Z);
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

// ── Update: HUD ───────────────────────────────────────────────────────────────

/// Refresh the score HUD.
pub fn hud_score_display_system(
    sim: Res<SimulationState>,
    parent_query: Query<&Children, With<HudScoreDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    write_child_text(&parent_query, &mut text_query, &score_label(sim.score));
}

/// Refresh the top-right debug readout.
pub fn coordinates_display_system(
    sim: Res<SimulationState>,
    parent_query: Query<&Children, With<CoordinatesDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    write_child_text(&parent_query, &mut text_query, &debug_readout(&sim));
}

/// Show the pause overlay exactly while the simulation is paused.
pub fn sync_pause_overlay_system(
    sim: Res<SimulationState>,
    mut query: Query<&mut Visibility, With<PauseOverlay>>,
) {
    let vis = if sim.paused {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut v in query.iter_mut() {
        if *v != vis {
            *v = vis;
        }
    }
}
