//! Projectile vs enemy hit test
//!
//! A single threshold: the projectile circle against a circle of the enemy's
//! half-width. No partial damage, no friendly fire.

use super::enemy::EnemyTank;
use super::projectile::Projectile;
use crate::consts::TANK_WIDTH;
use crate::distance;

/// Distance under which a projectile counts as a hit
#[inline]
fn hit_radius(projectile: &Projectile) -> f32 {
    projectile.radius + TANK_WIDTH / 2.0
}

/// True iff the centres are strictly closer than projectile radius + enemy half-width
pub fn hits(projectile: &Projectile, enemy: &EnemyTank) -> bool {
    distance(projectile.pos, enemy.pos) < hit_radius(projectile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_hit_inside_threshold() {
        let enemy = EnemyTank::new(Vec2::new(400.0, 100.0));
        let p = Projectile::new(Vec2::new(410.0, 110.0), 0.0);
        assert!(hits(&p, &enemy));
    }

    #[test]
    fn test_exact_threshold_is_a_miss() {
        let enemy = EnemyTank::new(Vec2::new(400.0, 100.0));
        // 4 + 20 = 24
        let p = Projectile::new(Vec2::new(424.0, 100.0), 0.0);
        assert_eq!(distance(p.pos, enemy.pos), 24.0);
        assert!(!hits(&p, &enemy));

        let p = Projectile::new(Vec2::new(400.0, 76.0), 0.0);
        assert!(!hits(&p, &enemy));
        let p = Projectile::new(Vec2::new(423.9, 100.0), 0.0);
        assert!(hits(&p, &enemy));
    }

    proptest! {
        #[test]
        fn prop_hits_matches_distance(
            px in 0.0f32..800.0,
            py in 0.0f32..600.0,
            ex in 20.0f32..780.0,
            ey in 15.0f32..585.0,
        ) {
            let p = Projectile::new(Vec2::new(px, py), 0.0);
            let e = EnemyTank::new(Vec2::new(ex, ey));
            let d = Vec2::new(px, py).distance(Vec2::new(ex, ey));
            prop_assert_eq!(hits(&p, &e), d < 24.0);
        }
    }
}
