//! Celestial bodies: static, self-rotating circular planets.
//!
//! A body never moves.  Its position and radius are fixed at construction and
//! only `orientation` advances, at `rotation_speed` rad/s.  Orientation drives
//! the planet sprite and the surface-follow of a resting ship.

use bevy::math::Vec2;

use crate::config::{PhysicsConfig, PlanetConfig};

/// A planet the ship can orbit, land on, and launch from.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    position: Vec2,
    radius: f32,
    /// Surface acceleration (u/s²) at `radius`.
    pub gravity: f32,
    /// Current sprite rotation (radians).  Only ever increases for positive spin.
    pub orientation: f32,
    /// Spin rate (rad/s).
    pub rotation_speed: f32,
}

impl CelestialBody {
    /// Build a body from its diameter (`size`), as planets are specified.
    pub fn new(
        position: Vec2,
        size: f32,
        gravity: f32,
        orientation: f32,
        rotation_speed: f32,
    ) -> Self {
        Self {
            position,
            radius: size / 2.0,
            gravity,
            orientation,
            rotation_speed,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Diameter; the unit the boost reach is measured in.
    #[inline]
    pub fn size(&self) -> f32 {
        self.radius * 2.0
    }

    /// Centre distance below which a ship of `ship_radius` is in contact.
    ///
    /// The body is padded by `contact_radius_factor` so the ship settles just
    /// above the visible surface.
    #[inline]
    pub fn contact_distance(&self, ship_radius: f32, contact_radius_factor: f32) -> f32 {
        self.radius * contact_radius_factor + ship_radius
    }

    /// Centre distance at which a resting ship is carried around by the spin.
    ///
    /// Sits inside the contact shell, so a resting ship is still in contact on
    /// the next tick and does not flicker between resting and airborne.
    #[inline]
    pub fn resting_distance(&self, ship_radius: f32) -> f32 {
        self.radius + ship_radius
    }

    /// Advance the spin by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.orientation += self.rotation_speed * dt;
    }
}

impl From<&PlanetConfig> for CelestialBody {
    fn from(p: &PlanetConfig) -> Self {
        CelestialBody::new(
            Vec2::new(p.x, p.y),
            p.size,
            p.gravity,
            p.orientation,
            p.rotation_speed,
        )
    }
}

/// Instantiate the configured planet layout in list order.
///
/// Order matters: collision resolution honours only the first body hit.
pub fn bodies_from_config(config: &PhysicsConfig) -> Vec<CelestialBody> {
    config.planets.iter().map(CelestialBody::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn radius_is_half_size() {
        let body = CelestialBody::new(Vec2::ZERO, 500.0, 9810.0, 0.0, 0.1);
        assert_eq!(body.radius(), 250.0);
        assert_eq!(body.size(), 500.0);
    }

    #[test]
    fn contact_distance_pads_radius() {
        let body = CelestialBody::new(Vec2::ZERO, 500.0, 9810.0, 0.0, 0.1);
        assert_relative_eq!(body.contact_distance(32.0, 1.1), 307.0, epsilon = 1e-4);
        assert_relative_eq!(body.resting_distance(32.0), 282.0, epsilon = 1e-4);
    }

    #[test]
    fn update_only_changes_orientation() {
        let mut body = CelestialBody::new(Vec2::new(3.0, 4.0), 100.0, 50.0, 1.0, 0.5);
        body.update(2.0);
        assert_relative_eq!(body.orientation, 2.0, epsilon = 1e-6);
        assert_eq!(body.position(), Vec2::new(3.0, 4.0));
        assert_eq!(body.radius(), 50.0);
    }

    #[test]
    fn default_layout_matches_config_order() {
        let bodies = bodies_from_config(&PhysicsConfig::default());
        assert_eq!(bodies.len(), 3);
        assert_eq!(bodies[0].position(), Vec2::new(1500.0, 1300.0));
        assert_eq!(bodies[0].gravity, 9810.0);
        assert_eq!(bodies[2].radius(), 350.0);
    }
}
