//! Straight-line projectiles fired by the player

use glam::Vec2;

use crate::consts::*;
use crate::{heading_vector, in_field};

/// A projectile; heading is copied at fire time and never changes
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    pub heading: f32,
    pub speed: f32,
    pub radius: f32,
    /// Ticks remaining before the projectile is discarded
    pub lifetime: u32,
}

impl Projectile {
    pub fn new(pos: Vec2, heading: f32) -> Self {
        Self {
            pos,
            heading,
            speed: PROJECTILE_SPEED,
            radius: PROJECTILE_RADIUS,
            lifetime: PROJECTILE_LIFETIME,
        }
    }

    pub fn tick(&mut self) {
        self.pos += heading_vector(self.heading) * self.speed;
        self.lifetime = self.lifetime.saturating_sub(1);
    }

    /// Lifetime left and still on the field (edges count as inside)
    pub fn is_live(&self) -> bool {
        self.lifetime > 0 && in_field(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tick_advances_along_heading() {
        let mut p = Projectile::new(Vec2::new(100.0, 100.0), std::f32::consts::FRAC_PI_2);
        p.tick();
        assert!((p.pos - Vec2::new(100.0, 107.0)).length() < 1e-4);
        assert_eq!(p.lifetime, PROJECTILE_LIFETIME - 1);
    }

    #[test]
    fn test_leaves_field() {
        let mut p = Projectile::new(Vec2::new(795.0, 300.0), 0.0);
        assert!(p.is_live());
        p.tick();
        assert!(!p.is_live());
        assert!(p.lifetime > 0);
    }

    #[test]
    fn test_lifetime_saturates() {
        let mut p = Projectile::new(Vec2::new(400.0, 300.0), 0.0);
        p.speed = 0.0;
        for _ in 0..PROJECTILE_LIFETIME + 5 {
            p.tick();
        }
        assert_eq!(p.lifetime, 0);
        assert!(!p.is_live());
    }

    proptest! {
        #[test]
        fn prop_expires_after_exactly_lifetime_ticks(
            lifetime in 1u32..200,
            heading in -10.0f32..10.0,
        ) {
            // Stationary so it can never leave the field
            let mut p = Projectile::new(Vec2::new(400.0, 300.0), heading);
            p.speed = 0.0;
            p.lifetime = lifetime;
            for _ in 0..lifetime - 1 {
                p.tick();
                prop_assert!(p.is_live());
            }
            p.tick();
            prop_assert!(!p.is_live());
        }
    }
}
