//! Player module: ship state, input handling, and rendering.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | `Ship` kinematics, the `ShipIntent` resource, the `BoostTrigger` debounce, and the `Player` marker |
//! | [`control`] | Input systems: arrows / WASD thrust, Space boost, T pause |
//! | [`rendering`] | Ship dart mesh and per-frame sprite placement |
//!
//! All public items are re-exported at this level so that the rest of the crate
//! can use flat `crate::player::*` imports without knowing the sub-module layout.

pub mod control;
pub mod rendering;
pub mod state;

// ── Flat re-exports ───────────────────────────────────────────────────────────

pub use control::{
    boost_trigger_system, keyboard_to_intent_system, pause_toggle_system,
    player_intent_clear_system,
};
pub use rendering::{attach_player_ship_mesh_system, sync_ship_sprite_system};
pub use state::{BoostTrigger, Player, Ship, ShipIntent};

// ── Ship spawn ─────────────────────────────────────────────────────────────────

use bevy::prelude::*;

/// Spawn the entity that draws the player's ship.
///
/// The simulation owns the ship's state; this entity only carries the
/// transform the sprite sync writes into.
pub fn spawn_player(mut commands: Commands) {
    commands.spawn((Player, Transform::default(), Visibility::default()));
    info!("Player ship spawned");
}
