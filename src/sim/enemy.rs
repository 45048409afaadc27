//! The wandering enemy tank

use glam::Vec2;
use rand::Rng;

use crate::clamp_to_field;
use crate::consts::*;

/// Enemy tank; idles between wander steps
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyTank {
    pub pos: Vec2,
    pub speed: f32,
    /// Stored but never depleted; one hit is lethal
    pub health: i32,
    /// Ticks since spawn
    pub wander_timer: u32,
}

impl Default for EnemyTank {
    fn default() -> Self {
        Self::new(Vec2::from(ENEMY_START))
    }
}

impl EnemyTank {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos: clamp_to_field(pos, Self::half_extents()),
            speed: ENEMY_SPEED,
            health: TANK_HEALTH,
            wander_timer: 0,
        }
    }

    /// Spawn at a uniformly random whole-pixel position inside the respawn region
    pub fn spawn_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = rng.random_range(ENEMY_SPAWN_X.0..=ENEMY_SPAWN_X.1);
        let y = rng.random_range(ENEMY_SPAWN_Y.0..=ENEMY_SPAWN_Y.1);
        Self::new(Vec2::new(x as f32, y as f32))
    }

    #[inline]
    pub fn half_extents() -> Vec2 {
        Vec2::new(TANK_WIDTH / 2.0, TANK_HEIGHT / 2.0)
    }

    /// Advance the wander timer; every `ENEMY_WANDER_INTERVAL` ticks take one
    /// random step of {-1, 0, 1} per axis scaled by speed.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.wander_timer += 1;
        if self.wander_timer % ENEMY_WANDER_INTERVAL != 0 {
            return;
        }

        let dx = rng.random_range(-1i32..=1) as f32;
        let dy = rng.random_range(-1i32..=1) as f32;
        self.pos = clamp_to_field(
            self.pos + Vec2::new(dx, dy) * self.speed,
            Self::half_extents(),
        );
    }
}
