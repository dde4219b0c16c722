//! Ship physics: thrust, planetary gravity, contact, boost, and bounds.
//!
//! ## Pipeline (one call to [`physics_step`] per frame)
//!
//! 1. [`thrust_vector`]: player acceleration from the held movement keys.
//! 2. [`scan_bodies`]: gravity from every body, or contact with the first
//!    body the ship has sunk into (which pins the ship to the contact shell).
//! 3. Gravity integration and boost decay (airborne only).
//! 4. Thrust integration (airborne only; a resting ship cannot steer).
//! 5. Position integration.
//! 6. Drag and speed cap ([`clamp_speed`]).
//! 7. Visual offset ([`update_visual_offset`]).
//! 8. Surface follow ([`follow_surface`]) for a resting, un-boosted ship.
//! 9. World clamp ([`clamp_to_world`]).
//!
//! Every stage is a plain function over [`Ship`] and `&[CelestialBody]` so it
//! can be tested without a Bevy `App`.

use bevy::prelude::*;

use crate::body::CelestialBody;
use crate::config::PhysicsConfig;
use crate::constants::{CONTACT_PIN_ULPS, DISTANCE_EPSILON};
use crate::math::{heading, on_circle, try_unit};
use crate::player::state::{Ship, ShipIntent};

/// The body a ship is resting on this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Index into the body slice the scan ran over.
    pub body: usize,
    /// Unit vector from the body centre toward the ship.
    pub normal: Vec2,
}

impl Contact {
    /// Outward radial angle of the contact point.
    #[inline]
    pub fn angle(&self) -> f32 {
        heading(self.normal)
    }
}

/// Result of the gravity & contact scan.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyScan {
    /// Summed gravitational acceleration of the bodies examined (u/s²).
    pub gravity: Vec2,
    /// Magnitude of the last gravity contribution kept this tick.
    ///
    /// Used as the speed ceiling while boosted.  Last-contributor-wins is an
    /// inherited quirk: the ceiling depends on body order, not on the
    /// strongest pull.
    pub speed_cap_basis: Option<f32>,
    /// First body in list order the ship was found inside, if any.
    pub contact: Option<Contact>,
}

/// What a physics step decided; threaded into orientation and logging.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    pub contact: Option<Contact>,
    pub speed_cap_basis: Option<f32>,
    /// Launch impulse applied on contact this tick (u/s), if any.
    pub launch_impulse: Option<f32>,
}

// ── Stage 1: thrust ───────────────────────────────────────────────────────────

/// Player acceleration for the held keys: unit direction × `thrust`.
///
/// Diagonals are normalised so they are no faster than a single axis.
/// Returns zero when no key is held or opposite keys cancel.
pub fn thrust_vector(intent: &ShipIntent, thrust: f32) -> Vec2 {
    try_unit(intent.direction()).map_or(Vec2::ZERO, |dir| dir * thrust)
}

// ── Stage 2: gravity & contact ────────────────────────────────────────────────

/// Gravitational acceleration a body exerts on a point outside its contact shell.
///
/// `a = gravity · (radius / distance)²`, pointing at the body centre.  Returns
/// `None` when the magnitude does not exceed `gravity_floor`, or when the point
/// sits on the centre.
pub fn gravity_acceleration(body: &CelestialBody, point: Vec2, gravity_floor: f32) -> Option<Vec2> {
    let delta = body.position() - point;
    let distance = delta.length();
    if distance < DISTANCE_EPSILON {
        return None;
    }
    let ratio = body.radius() / distance;
    let magnitude = body.gravity * ratio * ratio;
    (magnitude > gravity_floor).then(|| delta / distance * magnitude)
}

/// Depth below the contact shell at which a resolved ship is parked, so the
/// next tick's strict `distance < min_distance` test still sees it.
fn pin_inset(body: &CelestialBody, min_distance: f32) -> f32 {
    let scale = body.position().abs().max_element().max(min_distance);
    scale * f32::EPSILON * CONTACT_PIN_ULPS
}

/// Accumulate gravity and resolve contact against `bodies`, in list order.
///
/// On the first body whose contact distance the ship is inside, the ship is
/// moved onto that distance (a few ulps inside, see [`pin_inset`]) along the
/// outward normal and its velocity is cancelled.  If the boost trigger is armed (`boost_ready`) and the stored
/// boost exceeds `boost_impulse_min`, the velocity becomes
/// `normal · boost` instead.  Bodies after the contact are not examined.
pub fn scan_bodies(
    ship: &mut Ship,
    bodies: &[CelestialBody],
    boost_ready: bool,
    config: &PhysicsConfig,
) -> BodyScan {
    let ship_radius = ship.radius();
    let mut scan = BodyScan::default();

    for (index, body) in bodies.iter().enumerate() {
        let mut delta = body.position() - ship.position;
        let mut distance = delta.length();
        let min_distance = body.contact_distance(ship_radius, config.contact_radius_factor);

        if distance < min_distance {
            // Coincident centres: pretend the body is one unit to the right.
            if distance < DISTANCE_EPSILON {
                delta = Vec2::X;
                distance = 1.0;
            }
            let normal = -delta / distance;
            let pinned = min_distance - pin_inset(body, min_distance);
            ship.position = body.position() + normal * pinned;
            ship.velocity = Vec2::ZERO;
            if boost_ready && ship.boost > config.boost_impulse_min {
                ship.velocity = normal * ship.boost;
            }
            scan.contact = Some(Contact {
                body: index,
                normal,
            });
            break;
        }

        if let Some(acc) = gravity_acceleration(body, ship.position, config.gravity_floor) {
            scan.gravity += acc;
            scan.speed_cap_basis = Some(acc.length());
        }
    }

    scan
}

// ── Stage 6: drag & speed cap ─────────────────────────────────────────────────

/// Apply the speed ceiling to `ship.velocity`.
///
/// While boosted (`boost > boost_speed_cap_threshold`) the ceiling is the
/// gravity-derived `speed_cap_basis`; with no basis this tick a boosted ship
/// is uncapped.  Otherwise the ceiling is `cruise_speed_cap`.
pub fn clamp_speed(ship: &mut Ship, speed_cap_basis: Option<f32>, config: &PhysicsConfig) {
    let speed = ship.speed();
    if speed < DISTANCE_EPSILON {
        return;
    }
    let ceiling = if ship.boost > config.boost_speed_cap_threshold {
        speed_cap_basis
    } else {
        Some(config.cruise_speed_cap)
    };
    if let Some(ceiling) = ceiling {
        if speed > ceiling {
            ship.velocity *= ceiling / speed;
        }
    }
}

// ── Stage 7: visual offset ────────────────────────────────────────────────────

/// Ease the banking offset.
///
/// Airborne: toward `normalize(velocity) · offset_magnitude` (zero when
/// stationary).  Resting: toward zero.
pub fn update_visual_offset(ship: &mut Ship, resting: bool, config: &PhysicsConfig) {
    ship.target_offset = try_unit(ship.velocity)
        .map_or(Vec2::ZERO, |dir| dir * config.offset_magnitude);
    let goal = if resting {
        Vec2::ZERO
    } else {
        ship.target_offset
    };
    ship.offset += (goal - ship.offset) * config.offset_smoothing;
}

// ── Stage 8: surface follow ───────────────────────────────────────────────────

/// Carry a resting ship around `body` by the body's spin over `dt`.
///
/// The ship is placed on the body's resting circle at its current angle
/// advanced by `rotation_speed · dt`.
pub fn follow_surface(ship: &mut Ship, body: &CelestialBody, dt: f32) {
    let angle = heading(ship.position - body.position()) + body.rotation_speed * dt;
    ship.position = on_circle(body.position(), body.resting_distance(ship.radius()), angle);
}

// ── Stage 9: world clamp ──────────────────────────────────────────────────────

/// Clamp the ship into the square `[-world_radius, world_radius]²`.
pub fn clamp_to_world(ship: &mut Ship, world_radius: f32) {
    ship.position = ship
        .position
        .clamp(Vec2::splat(-world_radius), Vec2::splat(world_radius));
}

// ── Full step ─────────────────────────────────────────────────────────────────

/// Advance the ship by one tick of `dt` seconds.
///
/// `dt` is used as given; callers clamp it first (see
/// [`crate::simulation::SimulationState::tick`]).
pub fn physics_step(
    ship: &mut Ship,
    bodies: &[CelestialBody],
    intent: &ShipIntent,
    boost_ready: bool,
    dt: f32,
    config: &PhysicsConfig,
) -> StepReport {
    let thrust = thrust_vector(intent, ship.thrust);
    let scan = scan_bodies(ship, bodies, boost_ready, config);
    let resting = scan.contact.is_some();

    let launch_impulse = scan
        .contact
        .filter(|_| ship.velocity != Vec2::ZERO)
        .map(|_| ship.boost);

    if !resting {
        ship.velocity += scan.gravity * dt;
        ship.boost *= config.boost_decay;
        ship.velocity += thrust * config.steering_priority * dt;
    }

    ship.position += ship.velocity * dt;

    ship.velocity *= if thrust != Vec2::ZERO {
        config.drag_thrusting
    } else {
        config.drag_idle
    };
    clamp_speed(ship, scan.speed_cap_basis, config);

    update_visual_offset(ship, resting, config);

    if let Some(contact) = scan.contact {
        if ship.boost < config.surface_follow_boost_max {
            follow_surface(ship, &bodies[contact.body], dt);
        }
    }

    clamp_to_world(ship, config.world_radius);

    StepReport {
        contact: scan.contact,
        speed_cap_basis: scan.speed_cap_basis,
        launch_impulse,
    }
}

// ── Boost charging ────────────────────────────────────────────────────────────

/// Charge the boost from the first body within reach.
///
/// Only charges while a movement key is held.  Reach is measured from the
/// body centre as `size · boost_reach_factor` (diameter, not radius).  The
/// body's gravity strength is added to `ship.boost`.  Returns the index of the
/// charging body.
pub fn boost_if_near_planet(
    ship: &mut Ship,
    bodies: &[CelestialBody],
    intent: &ShipIntent,
    config: &PhysicsConfig,
) -> Option<usize> {
    if !intent.is_thrusting() {
        return None;
    }
    let (index, body) = bodies.iter().enumerate().find(|(_, body)| {
        ship.position.distance(body.position()) < body.size() * config.boost_reach_factor
    })?;
    ship.boost += body.gravity;
    Some(index)
}
