//! Player ship state, input intent, and the boost trigger.
//!
//! The authoritative ship lives inside [`crate::simulation::SimulationState`];
//! the ECS only carries a [`Player`] marker on the sprite entity.  Systems that
//! mutate this state are in the sibling modules:
//! - [`super::control`]: keyboard → intent, boost trigger, pause
//! - [`super::rendering`]: ship mesh and sprite placement

use crate::config::PhysicsConfig;
use bevy::prelude::*;

// ── Components ─────────────────────────────────────────────────────────────────

/// Marker component for the player ship sprite entity.
#[derive(Component)]
pub struct Player;

// ── Ship state ─────────────────────────────────────────────────────────────────

/// Kinematic and presentation state of the single player ship.
///
/// World coordinates: +Y is down.  `velocity` is in u/s.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Collision diameter; the collision radius is half of it.
    pub size: f32,
    /// Player acceleration (u/s²) before the steering multiplier.
    pub thrust: f32,
    /// Launch energy.  Charged near a planet, halved every airborne tick,
    /// spent as an outward impulse on contact once the trigger is released.
    pub boost: f32,
    /// Lagging sprite displacement for the banking effect.
    pub offset: Vec2,
    /// Where `offset` is heading this tick.
    pub target_offset: Vec2,
    /// Sprite facing (radians, world frame).
    pub angle: f32,
}

impl Ship {
    /// A ship at rest at the world origin.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: config.ship_size,
            thrust: config.ship_thrust,
            boost: 0.0,
            offset: Vec2::ZERO,
            target_offset: Vec2::ZERO,
            angle: 0.0,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

// ── Input Abstraction ──────────────────────────────────────────────────────────

/// Movement keys held this frame, derived from all keyboard bindings.
///
/// [`super::control::keyboard_to_intent_system`] fills it after it is cleared;
/// the simulation tick reads it.  Tests populate it directly to drive the ship
/// without a real input device.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl ShipIntent {
    /// `true` when at least one movement key is held.
    #[inline]
    pub fn is_thrusting(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Raw direction with one unit per held key (world frame, up is −Y).
    ///
    /// Opposite keys cancel.  Not normalised.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.right {
            dir.x += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        dir
    }
}

// ── Boost trigger ──────────────────────────────────────────────────────────────

/// Debounce for the boost key.
///
/// `ready` is true while the key is up.  A press fires exactly once and
/// disarms the trigger until the key is released, so holding the key charges
/// one boost.  While `ready`, a contact pass converts stored boost into a
/// launch impulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoostTrigger {
    ready: bool,
}

impl Default for BoostTrigger {
    fn default() -> Self {
        Self { ready: true }
    }
}

impl BoostTrigger {
    /// Register a key-down.  Returns `true` only on the edge that should charge.
    pub fn press(&mut self) -> bool {
        if self.ready {
            self.ready = false;
            true
        } else {
            false
        }
    }

    /// Register a key-up; re-arms the trigger.
    pub fn release(&mut self) {
        self.ready = true;
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }
}
