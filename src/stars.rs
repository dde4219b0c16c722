//! Collectible stars and the score pass.
//!
//! The field always holds the same number of stars: every star picked up is
//! replaced by a fresh one at a random spot in the world square.

use bevy::math::Vec2;
use rand::Rng;

use crate::config::PhysicsConfig;
use crate::player::state::Ship;

/// A collectible marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec2,
}

/// The live set of stars plus the geometry they were scattered with.
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    stars: Vec<Star>,
    /// Half-extent of the square new stars are dropped into.
    spread: f32,
    /// Pickup radius of every star.
    pub radius: f32,
}

impl StarField {
    /// Scatter `config.star_count` stars over the world square.
    pub fn scatter<R: Rng>(config: &PhysicsConfig, rng: &mut R) -> Self {
        let mut field = Self {
            stars: Vec::with_capacity(config.star_count),
            spread: config.world_radius,
            radius: config.star_radius(),
        };
        for _ in 0..config.star_count {
            field.spawn(rng);
        }
        field
    }

    /// A field with explicit star positions; new stars still land in `spread`.
    pub fn from_positions(positions: &[Vec2], spread: f32, radius: f32) -> Self {
        Self {
            stars: positions.iter().map(|&position| Star { position }).collect(),
            spread,
            radius,
        }
    }

    /// Add one star uniformly inside `[-spread, spread]²`.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) {
        let position = Vec2::new(
            rng.gen_range(-self.spread..self.spread),
            rng.gen_range(-self.spread..self.spread),
        );
        self.stars.push(Star { position });
    }

    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

/// The point stars are tested against: the ship pulled back against its
/// banking offset, so pickups line up with the leaning sprite.
#[inline]
pub fn pickup_point(ship: &Ship, offset_factor: f32) -> Vec2 {
    ship.position - ship.offset * offset_factor
}

/// Collect every star touching the ship, replace each one, and return how many.
///
/// Hits are gathered in one pass and applied in a second, so several stars
/// picked up in the same tick never disturb the scan.
pub fn collect_stars<R: Rng>(
    ship: &Ship,
    field: &mut StarField,
    config: &PhysicsConfig,
    rng: &mut R,
) -> u32 {
    let probe = pickup_point(ship, config.star_pickup_offset_factor);
    let reach = field.radius + ship.radius();

    let hits: Vec<usize> = field
        .stars
        .iter()
        .enumerate()
        .filter(|(_, star)| probe.distance(star.position) < reach)
        .map(|(index, _)| index)
        .collect();

    // Descending so earlier indices stay valid across swap_remove.
    for &index in hits.iter().rev() {
        field.stars.swap_remove(index);
    }
    for _ in 0..hits.len() {
        field.spawn(rng);
    }

    hits.len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ship() -> Ship {
        Ship::new(&PhysicsConfig::default())
    }

    #[test]
    fn scatter_fills_world_square() {
        let config = PhysicsConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let field = StarField::scatter(&config, &mut rng);
        assert_eq!(field.len(), config.star_count);
        assert!(field
            .stars()
            .iter()
            .all(|s| s.position.abs().max_element() <= config.world_radius));
    }

    #[test]
    fn several_hits_in_one_pass_keep_count() {
        let config = PhysicsConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = StarField::from_positions(
            &[
                Vec2::new(5.0, 0.0),
                Vec2::new(5_000.0, 5_000.0),
                Vec2::new(-10.0, 3.0),
                Vec2::new(0.0, 20.0),
            ],
            config.world_radius,
            config.star_radius(),
        );

        let collected = collect_stars(&ship(), &mut field, &config, &mut rng);

        assert_eq!(collected, 3);
        assert_eq!(field.len(), 4);
        assert!(field
            .stars()
            .iter()
            .any(|s| s.position == Vec2::new(5_000.0, 5_000.0)));
    }

    #[test]
    fn pickup_uses_offset_adjusted_point() {
        let config = PhysicsConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut s = ship();
        s.offset = Vec2::new(40.0, 0.0);
        // Probe sits at (-60, 0); a star at +30 is 90 away, beyond reach 37.
        let mut field = StarField::from_positions(&[Vec2::new(30.0, 0.0)], 100.0, 5.0);
        assert_eq!(collect_stars(&s, &mut field, &config, &mut rng), 0);

        let mut field = StarField::from_positions(&[Vec2::new(-60.0, 10.0)], 100.0, 5.0);
        assert_eq!(collect_stars(&s, &mut field, &config, &mut rng), 1);
    }

    #[test]
    fn miss_leaves_field_untouched() {
        let config = PhysicsConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let positions = [Vec2::new(400.0, 400.0), Vec2::new(-900.0, 10.0)];
        let mut field = StarField::from_positions(&positions, 100.0, 5.0);
        assert_eq!(collect_stars(&ship(), &mut field, &config, &mut rng), 0);
        assert_eq!(field.stars()[0].position, positions[0]);
        assert_eq!(field.stars()[1].position, positions[1]);
    }
}
