//! Centralised physics and gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//!
//! ## Tuning guidance
//!
//! Every constant is mirrored by a field of [`crate::config::PhysicsConfig`],
//! so `assets/physics.toml` can override it without recompiling.  The values
//! below are the compiled defaults and the numbers the gameplay was tuned with.
//!
//! World coordinates follow screen convention: +X is right, +Y is **down**.
//! The rendering layer flips Y when building Bevy transforms.

use std::f32::consts::FRAC_PI_4;

// ── World Bounds ──────────────────────────────────────────────────────────────

/// Half-extent of the square playfield (world units).
///
/// The ship is hard-clamped to `[-WORLD_RADIUS, WORLD_RADIUS]` on both axes and
/// stars are scattered uniformly over the same square.
pub const WORLD_RADIUS: f32 = 10_000.0;

/// Largest frame delta (seconds) fed into a single physics step.
///
/// A backgrounded window can hand back a multi-second frame; integrating that
/// in one step teleports the ship through planets.  0.1 s is six 60 Hz frames.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Distances and speeds below this are treated as zero before dividing.
pub const DISTANCE_EPSILON: f32 = 1e-6;

/// How many f32 ulps (of the larger of the body's coordinates and its contact
/// distance) a resolved ship is placed inside the contact shell.
///
/// Re-measuring the pinned distance next tick must still come out below the
/// shell, or a ship holding a charged boost would drop off its planet.
pub const CONTACT_PIN_ULPS: f32 = 16.0;

// ── Ship ──────────────────────────────────────────────────────────────────────

/// Collision diameter of the ship (world units).  The collision radius is half.
pub const SHIP_SIZE: f32 = 64.0;

/// Player thrust acceleration (u/s²) before the steering multiplier.
pub const SHIP_THRUST: f32 = 700.0;

/// Multiplier applied to player thrust so steering can overpower gravity.
///
/// At 3.0 the effective thrust is 2 100 u/s², enough to climb out of every
/// default planet's gravity well above the floor.
pub const STEERING_PRIORITY: f32 = 3.0;

/// Velocity multiplier applied every tick when no movement key is held.
pub const DRAG_IDLE: f32 = 0.98;

/// Velocity multiplier applied every tick while a movement key is held.
pub const DRAG_THRUSTING: f32 = 0.999;

/// Normal speed ceiling (u/s) for un-boosted flight.
pub const CRUISE_SPEED_CAP: f32 = 700.0;

// ── Gravity & Contact ─────────────────────────────────────────────────────────

/// Bodies are padded by this factor before adding the ship radius to form
/// the contact distance: `radius * 1.1 + ship_radius`.
pub const CONTACT_RADIUS_FACTOR: f32 = 1.1;

/// Gravitational accelerations (u/s²) at or below this are discarded.
///
/// Keeps far-away planets from adding a constant low-level drift.  Also means
/// the gravity-derived speed ceiling is never below 100 u/s.
pub const GRAVITY_FLOOR: f32 = 100.0;

// ── Boost ─────────────────────────────────────────────────────────────────────

/// Boost accumulator multiplier applied on every airborne tick.
pub const BOOST_DECAY: f32 = 0.5;

/// Boost must exceed this for a launch impulse to be applied on contact.
pub const BOOST_IMPULSE_MIN: f32 = 1.0;

/// Above this boost the speed cap switches from `CRUISE_SPEED_CAP` to the
/// gravity-derived ceiling.
pub const BOOST_SPEED_CAP_THRESHOLD: f32 = 700.0;

/// A resting ship follows its planet's rotation only while boost is below this.
pub const SURFACE_FOLLOW_BOOST_MAX: f32 = 5.0;

/// Charging reach as a multiple of the body **diameter** (`size`).
pub const BOOST_REACH_FACTOR: f32 = 1.1;

// ── Presentation Smoothing ────────────────────────────────────────────────────

/// Length (u) of the banking offset the ship sprite leans toward while flying.
pub const OFFSET_MAGNITUDE: f32 = 50.0;

/// Per-tick interpolation weight of the visual offset.
pub const OFFSET_SMOOTHING: f32 = 0.1;

/// Per-tick interpolation weight of the camera toward the ship.
///
/// Applied per frame, not per second: smoothness depends on frame rate.
pub const CAMERA_SMOOTHING: f32 = 0.05;

/// Per-tick interpolation weight of the ship's facing angle.
pub const ORIENTATION_SMOOTHING: f32 = 0.08;

/// Below this speed (u/s) an airborne ship keeps its current heading.
pub const ORIENTATION_MIN_SPEED: f32 = 0.1;

// ── Stars ─────────────────────────────────────────────────────────────────────

/// Number of collectible stars alive at any time.
pub const STAR_COUNT: usize = 100;

/// Diameter of a star (world units).  Pickup radius is half.
pub const STAR_SIZE: f32 = 10.0;

/// The pickup point is `ship.position - offset * STAR_PICKUP_OFFSET_FACTOR`.
pub const STAR_PICKUP_OFFSET_FACTOR: f32 = 1.5;

// ── Planets ───────────────────────────────────────────────────────────────────

/// Default planet layout: `(x, y, size, gravity, orientation, rotation_speed)`.
///
/// `gravity` is the surface acceleration in u/s² (9810 reads as "9.81 m/s² at
/// 1000 px per metre").
pub const DEFAULT_PLANETS: [(f32, f32, f32, f32, f32, f32); 3] = [
    (1500.0, 1300.0, 500.0, 9810.0, 0.0, 0.1),
    (-600.0, -200.0, 150.0, 1081.0, FRAC_PI_4, 0.2),
    (2000.0, -1500.0, 700.0, 5000.0, FRAC_PI_4, 1.5),
];

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Font size of the score HUD and the debug readout.
pub const HUD_FONT_SIZE: f32 = 20.0;
