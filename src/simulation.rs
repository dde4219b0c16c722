//! Simulation state, the per-frame tick, and the Bevy plugin that drives it.
//!
//! ## Tick order
//!
//! | Stage | Function | Notes |
//! |-------|----------|-------|
//! | 1 | [`physics_step`] | thrust, gravity, contact, boost, bounds |
//! | 2 | [`CameraFollow::follow`] | fixed per-frame smoothing |
//! | 3 | [`CelestialBody::update`] | planet spin |
//! | 4 | [`update_orientation`] | uses the contact from stage 1 |
//! | 5 | [`collect_stars`] | collect-then-replace |
//!
//! ## Systems (registered by `SimulationPlugin`, chained, in `Playing`)
//!
//! | System | Purpose |
//! |--------|---------|
//! | `player_intent_clear_system` | zero the intent |
//! | `keyboard_to_intent_system` | arrows / WASD → intent |
//! | `boost_trigger_system` | Space press charges, release arms launch |
//! | `pause_toggle_system` | T flips the pause flag |
//! | `simulation_tick_system` | one [`SimulationState::tick`] |
//! | presentation sync | camera, sprites, HUD, pause overlay |

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::body::{bodies_from_config, CelestialBody};
use crate::config::PhysicsConfig;
use crate::graphics::{camera_follow_system, CameraFollow};
use crate::menu::GameState;
use crate::orientation::update_orientation;
use crate::physics::{boost_if_near_planet, physics_step, Contact, StepReport};
use crate::player::state::{BoostTrigger, Ship, ShipIntent};
use crate::player::{
    boost_trigger_system, keyboard_to_intent_system, pause_toggle_system,
    player_intent_clear_system, sync_ship_sprite_system,
};
use crate::rendering::{
    coordinates_display_system, hud_score_display_system, sync_pause_overlay_system,
    sync_planet_sprites_system, sync_star_sprites_system,
};
use crate::stars::{collect_stars, StarField};

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ShipIntent::default())
            .add_systems(OnEnter(GameState::Playing), reset_simulation_system)
            .add_systems(
                Update,
                (
                    player_intent_clear_system,
                    keyboard_to_intent_system,
                    boost_trigger_system,
                    pause_toggle_system,
                    simulation_tick_system,
                    camera_follow_system,
                    sync_ship_sprite_system,
                    sync_planet_sprites_system,
                    sync_star_sprites_system,
                    hud_score_display_system,
                    coordinates_display_system,
                    sync_pause_overlay_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

// ── State ─────────────────────────────────────────────────────────────────────

/// Everything one game session simulates.
///
/// Owned by the Bevy world as a single resource; created at startup, reset
/// when a game starts, never torn down.
#[derive(Resource, Debug, Clone)]
pub struct SimulationState {
    pub ship: Ship,
    pub camera: CameraFollow,
    pub bodies: Vec<CelestialBody>,
    pub stars: StarField,
    pub score: u32,
    /// Skips the tick; presentation keeps running.
    pub paused: bool,
    pub boost_trigger: BoostTrigger,
    /// Contact from the most recent tick.  Presentation only; the next tick
    /// recomputes it from scratch.
    pub contact: Option<Contact>,
    rng: StdRng,
}

/// What one tick did, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Delta actually integrated (after clamping).
    pub dt: f32,
    pub dt_clamped: bool,
    pub step: StepReport,
    /// Contact began this tick.
    pub landed: bool,
    pub collected: u32,
}

impl SimulationState {
    /// Fresh session with an entropy-seeded star field.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Fresh session with a deterministic star field.
    pub fn with_seed(config: &PhysicsConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &PhysicsConfig, mut rng: StdRng) -> Self {
        let ship = Ship::new(config);
        let stars = StarField::scatter(config, &mut rng);
        Self {
            camera: CameraFollow::at(ship.position),
            ship,
            bodies: bodies_from_config(config),
            stars,
            score: 0,
            paused: false,
            boost_trigger: BoostTrigger::default(),
            contact: None,
            rng,
        }
    }

    /// Start a new game: ship at rest at the origin, camera on the ship,
    /// planets back to their initial spin, new stars, zero score.
    pub fn reset(&mut self, config: &PhysicsConfig) {
        self.ship = Ship::new(config);
        self.camera.snap(self.ship.position);
        self.bodies = bodies_from_config(config);
        self.stars = StarField::scatter(config, &mut self.rng);
        self.score = 0;
        self.paused = false;
        self.boost_trigger = BoostTrigger::default();
        self.contact = None;
    }

    /// The body the ship rested on during the last tick.
    pub fn resting_on(&self) -> Option<&CelestialBody> {
        self.contact.map(|c| &self.bodies[c.body])
    }

    /// Where the ship sprite is drawn: the camera point plus the banking offset.
    pub fn ship_screen_anchor(&self) -> Vec2 {
        self.camera.smooth + self.ship.offset
    }

    /// Flip the pause flag; returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Boost key went down.  Charges from a nearby planet on the press edge only.
    ///
    /// Returns the charging body's index.
    pub fn press_boost(&mut self, intent: &ShipIntent, config: &PhysicsConfig) -> Option<usize> {
        if !self.boost_trigger.press() {
            return None;
        }
        boost_if_near_planet(&mut self.ship, &self.bodies, intent, config)
    }

    /// Boost key went up; the next contact pass may launch.
    pub fn release_boost(&mut self) {
        self.boost_trigger.release();
    }

    /// Run one frame of simulation.  Returns `None` while paused.
    ///
    /// `dt` is clamped to `[0, max_frame_dt]` before integration.
    pub fn tick(&mut self, intent: &ShipIntent, dt: f32, config: &PhysicsConfig) -> Option<TickReport> {
        if self.paused {
            return None;
        }

        let clamped = dt.clamp(0.0, config.max_frame_dt);
        let was_resting = self.contact.is_some();

        let step = physics_step(
            &mut self.ship,
            &self.bodies,
            intent,
            self.boost_trigger.is_ready(),
            clamped,
            config,
        );
        self.contact = step.contact;

        self.camera.follow(self.ship.position, config.camera_smoothing);

        for body in &mut self.bodies {
            body.update(clamped);
        }

        let host = self.contact.map(|c| &self.bodies[c.body]);
        update_orientation(
            &mut self.ship,
            host,
            config.orientation_smoothing,
            config.orientation_min_speed,
        );

        let collected = collect_stars(&self.ship, &mut self.stars, config, &mut self.rng);
        self.score += collected;

        Some(TickReport {
            dt: clamped,
            dt_clamped: clamped != dt,
            step,
            landed: !was_resting && step.contact.is_some(),
            collected,
        })
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Startup: build the session from the loaded configuration.
///
/// Must run after [`crate::config::load_physics_config`].
pub fn init_simulation_state(mut commands: Commands, config: Res<PhysicsConfig>) {
    commands.insert_resource(SimulationState::new(&config));
    info!(
        "Simulation ready: {} planets, {} stars",
        config.planets.len(),
        config.star_count
    );
}

/// `OnEnter(Playing)`: every game starts from a clean session.
pub fn reset_simulation_system(mut sim: ResMut<SimulationState>, config: Res<PhysicsConfig>) {
    sim.reset(&config);
    info!("Game started");
}

/// Advance the simulation by the frame delta.
pub fn simulation_tick_system(
    time: Res<Time>,
    intent: Res<ShipIntent>,
    mut sim: ResMut<SimulationState>,
    config: Res<PhysicsConfig>,
) {
    let raw_dt = time.delta_secs();
    let Some(report) = sim.tick(&intent, raw_dt, &config) else {
        return;
    };

    if report.dt_clamped {
        debug!("Frame delta {raw_dt:.3}s clamped to {:.3}s", report.dt);
    }
    if report.landed {
        if let Some(contact) = report.step.contact {
            debug!("Ship landed on planet #{}", contact.body);
        }
    }
    if let Some(impulse) = report.step.launch_impulse {
        debug!("Launch impulse {impulse:.0} u/s");
    }
    if report.collected > 0 {
        info!(
            "Collected {} star(s), score is now {}",
            report.collected, sim.score
        );
    }
}
