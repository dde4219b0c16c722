//! Ship facing: eased toward the surface normal while resting, otherwise
//! toward the direction of travel.

use crate::body::CelestialBody;
use crate::math::{heading, lerp_angle_safe};
use crate::player::state::Ship;

/// Angle the ship should face this tick.
///
/// Resting on `host`: the outward radial angle from the body to the ship.
/// Airborne above `min_speed`: the velocity heading.  Otherwise the current
/// angle, so a drifting ship keeps its last heading.
pub fn target_angle(ship: &Ship, host: Option<&CelestialBody>, min_speed: f32) -> f32 {
    match host {
        Some(body) => heading(ship.position - body.position()),
        None if ship.speed() > min_speed => heading(ship.velocity),
        None => ship.angle,
    }
}

/// Ease `ship.angle` toward [`target_angle`] with a fixed per-tick `weight`.
///
/// The weight is not scaled by `dt`, so turn rate depends on frame rate.
pub fn update_orientation(ship: &mut Ship, host: Option<&CelestialBody>, weight: f32, min_speed: f32) {
    let target = target_angle(ship, host, min_speed);
    ship.angle = lerp_angle_safe(ship.angle, target, weight);
}
