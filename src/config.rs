//! Runtime physics configuration loaded from `assets/physics.toml`.
//!
//! [`PhysicsConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_physics_config`] reads
//! `assets/physics.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the constants you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<PhysicsConfig>` to any system parameter list and read values
//! with `config.gravity_floor`, `config.world_radius`, etc.  The pure simulation
//! functions take `&PhysicsConfig` directly.
//!
//! ## Planets
//!
//! The planet layout is a list of `[[planets]]` tables.  Supplying the key
//! replaces the whole default list:
//!
//! ```toml
//! [[planets]]
//! x = 0.0
//! y = 800.0
//! size = 300.0
//! gravity = 4000.0
//! orientation = 0.0
//! rotation_speed = 0.3
//! ```
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `PhysicsConfig::default()`.

use crate::constants::*;
use crate::error::{
    validate_drag, validate_positive, validate_unit_weight, SimError, SimResult,
};
use bevy::prelude::*;
use serde::Deserialize;

/// Path of the optional override file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/physics.toml";

/// One planet entry of the configured layout.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PlanetConfig {
    pub x: f32,
    pub y: f32,
    /// Diameter in world units.
    pub size: f32,
    /// Surface acceleration in u/s².
    pub gravity: f32,
    /// Initial orientation (radians).
    #[serde(default)]
    pub orientation: f32,
    /// Spin rate (rad/s).
    #[serde(default)]
    pub rotation_speed: f32,
}

/// Runtime-tunable physics and gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/physics.toml`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // ── World Bounds ─────────────────────────────────────────────────────────
    pub world_radius: f32,
    pub max_frame_dt: f32,

    // ── Ship ──────────────────────────────────────────────────────────────────
    pub ship_size: f32,
    pub ship_thrust: f32,
    pub steering_priority: f32,
    pub drag_idle: f32,
    pub drag_thrusting: f32,
    pub cruise_speed_cap: f32,

    // ── Gravity & Contact ─────────────────────────────────────────────────────
    pub contact_radius_factor: f32,
    pub gravity_floor: f32,

    // ── Boost ─────────────────────────────────────────────────────────────────
    pub boost_decay: f32,
    pub boost_impulse_min: f32,
    pub boost_speed_cap_threshold: f32,
    pub surface_follow_boost_max: f32,
    pub boost_reach_factor: f32,

    // ── Presentation Smoothing ────────────────────────────────────────────────
    pub offset_magnitude: f32,
    pub offset_smoothing: f32,
    pub camera_smoothing: f32,
    pub orientation_smoothing: f32,
    pub orientation_min_speed: f32,

    // ── Stars ─────────────────────────────────────────────────────────────────
    pub star_count: usize,
    pub star_size: f32,
    pub star_pickup_offset_factor: f32,

    // ── Planets ───────────────────────────────────────────────────────────────
    pub planets: Vec<PlanetConfig>,

    // ── Rendering ─────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            // World Bounds
            world_radius: WORLD_RADIUS,
            max_frame_dt: MAX_FRAME_DT,
            // Ship
            ship_size: SHIP_SIZE,
            ship_thrust: SHIP_THRUST,
            steering_priority: STEERING_PRIORITY,
            drag_idle: DRAG_IDLE,
            drag_thrusting: DRAG_THRUSTING,
            cruise_speed_cap: CRUISE_SPEED_CAP,
            // Gravity & Contact
            contact_radius_factor: CONTACT_RADIUS_FACTOR,
            gravity_floor: GRAVITY_FLOOR,
            // Boost
            boost_decay: BOOST_DECAY,
            boost_impulse_min: BOOST_IMPULSE_MIN,
            boost_speed_cap_threshold: BOOST_SPEED_CAP_THRESHOLD,
            surface_follow_boost_max: SURFACE_FOLLOW_BOOST_MAX,
            boost_reach_factor: BOOST_REACH_FACTOR,
            // Presentation Smoothing
            offset_magnitude: OFFSET_MAGNITUDE,
            offset_smoothing: OFFSET_SMOOTHING,
            camera_smoothing: CAMERA_SMOOTHING,
            orientation_smoothing: ORIENTATION_SMOOTHING,
            orientation_min_speed: ORIENTATION_MIN_SPEED,
            // Stars
            star_count: STAR_COUNT,
            star_size: STAR_SIZE,
            star_pickup_offset_factor: STAR_PICKUP_OFFSET_FACTOR,
            // Planets
            planets: DEFAULT_PLANETS
                .iter()
                .map(
                    |&(x, y, size, gravity, orientation, rotation_speed)| PlanetConfig {
                        x,
                        y,
                        size,
                        gravity,
                        orientation,
                        rotation_speed,
                    },
                )
                .collect(),
            // Rendering
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

impl PhysicsConfig {
    /// Collision radius of the ship (half its size).
    #[inline]
    pub fn ship_radius(&self) -> f32 {
        self.ship_size / 2.0
    }

    /// Pickup radius of a star (half its size).
    #[inline]
    pub fn star_radius(&self) -> f32 {
        self.star_size / 2.0
    }

    /// Parse a TOML document and validate the result.
    ///
    /// `path` is only used to label parse errors.
    pub fn from_toml_str(contents: &str, path: &str) -> SimResult<Self> {
        let config: PhysicsConfig =
            toml::from_str(contents).map_err(|e| SimError::ConfigParse {
                path: path.to_owned(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall, explode, or NaN the simulation.
    pub fn validate(&self) -> SimResult<()> {
        validate_positive("WORLD_RADIUS", self.world_radius)?;
        validate_positive("MAX_FRAME_DT", self.max_frame_dt)?;
        validate_positive("SHIP_SIZE", self.ship_size)?;
        validate_positive("CONTACT_RADIUS_FACTOR", self.contact_radius_factor)?;
        validate_positive("CRUISE_SPEED_CAP", self.cruise_speed_cap)?;
        validate_positive("STAR_SIZE", self.star_size)?;
        validate_drag("DRAG_IDLE", self.drag_idle)?;
        validate_drag("DRAG_THRUSTING", self.drag_thrusting)?;
        validate_unit_weight("BOOST_DECAY", self.boost_decay)?;
        validate_unit_weight("OFFSET_SMOOTHING", self.offset_smoothing)?;
        validate_unit_weight("CAMERA_SMOOTHING", self.camera_smoothing)?;
        validate_unit_weight("ORIENTATION_SMOOTHING", self.orientation_smoothing)?;

        for (index, planet) in self.planets.iter().enumerate() {
            if !(planet.size > 0.0 && planet.size.is_finite()) {
                return Err(SimError::InvalidBody {
                    index,
                    reason: "size must be positive",
                });
            }
            if !planet.gravity.is_finite() || planet.gravity < 0.0 {
                return Err(SimError::InvalidBody {
                    index,
                    reason: "gravity must be finite and non-negative",
                });
            }
            if !(planet.x.is_finite() && planet.y.is_finite()) {
                return Err(SimError::InvalidBody {
                    index,
                    reason: "position must be finite",
                });
            }
        }
        Ok(())
    }
}

/// Startup system: attempt to load `assets/physics.toml` and overwrite the
/// `PhysicsConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  Parse and validation errors
/// are logged but do not abort the game.  A missing file is not an error.
pub fn load_physics_config(mut config: ResMut<PhysicsConfig>) {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match PhysicsConfig::from_toml_str(&contents, CONFIG_PATH) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded physics config from {CONFIG_PATH}");
            }
            Err(e) => {
                warn!("{e}; using defaults");
            }
        },
        Err(_) => {
            info!("No {CONFIG_PATH} found; using compiled defaults");
        }
    }
}
