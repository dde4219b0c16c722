//! Camera follow and world ↔ render coordinate mapping.
//!
//! The simulation uses screen-style world coordinates (+Y down).  Bevy renders
//! with +Y up, so every position and angle crossing into a `Transform` goes
//! through [`world_to_render`] / [`angle_to_render`].

use crate::simulation::SimulationState;
use bevy::prelude::*;

/// Exponentially smoothed point that trails the ship.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraFollow {
    pub smooth: Vec2,
}

impl CameraFollow {
    /// A camera already sitting on `target`.
    pub fn at(target: Vec2) -> Self {
        Self { smooth: target }
    }

    /// Move `smoothing` of the remaining way toward `target`.
    ///
    /// One call per frame; stable for `0 < smoothing <= 1`.  At equilibrium
    /// (`smooth == target`) this is a no-op.
    pub fn follow(&mut self, target: Vec2, smoothing: f32) {
        self.smooth += (target - self.smooth) * smoothing;
    }

    /// Jump straight onto `target` (session start).
    pub fn snap(&mut self, target: Vec2) {
        self.smooth = target;
    }
}

/// Marker for the single gameplay camera.
#[derive(Component)]
pub struct MainCamera;

/// Flip a world-space point into Bevy's +Y-up render space.
#[inline]
pub fn world_to_render(p: Vec2) -> Vec2 {
    Vec2::new(p.x, -p.y)
}

/// Flip a world-space rotation (clockwise on screen) into render space.
#[inline]
pub fn angle_to_render(angle: f32) -> f32 {
    -angle
}

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
    info!("Camera spawned");
}

/// Place the Bevy camera on the simulation's smoothed camera point.
pub fn camera_follow_system(
    sim: Res<SimulationState>,
    mut q_camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut cam) = q_camera.single_mut() else {
        return;
    };
    let p = world_to_render(sim.camera.smooth);
    cam.translation.x = p.x;
    cam.translation.y = p.y;
}
