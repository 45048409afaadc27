//! Tank Battle - A single-screen arcade tank game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tanks, projectiles, collisions, session)
//! - `renderer`: Draw commands, tessellation and the WebGPU pipeline
//! - `platform`: Keyboard state and fixed-rate clock
//! - `settings`: Runtime preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield size in pixels (origin top-left, y grows downward)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Target simulation rate
    pub const TICK_RATE_HZ: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Tank body size (shared by player and enemy)
    pub const TANK_WIDTH: f32 = 40.0;
    pub const TANK_HEIGHT: f32 = 30.0;
    pub const TANK_HEALTH: i32 = 100;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 3.0;
    /// Heading change per rotate call (radians)
    pub const PLAYER_TURN_STEP: f32 = 0.1;
    pub const PLAYER_START: (f32, f32) = (FIELD_WIDTH / 2.0, FIELD_HEIGHT - 100.0);
    /// Barrel length drawn from the tank centre
    pub const BARREL_LENGTH: f32 = 30.0;

    /// Enemy defaults
    pub const ENEMY_SPEED: f32 = 1.2;
    /// Ticks between wander steps
    pub const ENEMY_WANDER_INTERVAL: u32 = 90;
    pub const ENEMY_START: (f32, f32) = (FIELD_WIDTH / 2.0, 100.0);
    /// Respawn region (inclusive, whole pixels)
    pub const ENEMY_SPAWN_X: (i32, i32) = (100, FIELD_WIDTH as i32 - 100);
    pub const ENEMY_SPAWN_Y: (i32, i32) = (50, 150);

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 7.0;
    pub const PROJECTILE_RADIUS: f32 = 4.0;
    pub const PROJECTILE_LIFETIME: u32 = 60;

    /// Score awarded per destroyed enemy
    pub const HIT_SCORE: u64 = 10;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle >= PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}

/// Unit vector for a heading (radians, 0 = +x, positive turns toward +y)
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Clamp a body centre so a box with the given half extents stays on the field
#[inline]
pub fn clamp_to_field(pos: Vec2, half_extents: Vec2) -> Vec2 {
    use consts::{FIELD_HEIGHT, FIELD_WIDTH};
    Vec2::new(
        pos.x.clamp(half_extents.x, FIELD_WIDTH - half_extents.x),
        pos.y.clamp(half_extents.y, FIELD_HEIGHT - half_extents.y),
    )
}

/// True if a point lies on the field (edges included)
#[inline]
pub fn in_field(pos: Vec2) -> bool {
    use consts::{FIELD_HEIGHT, FIELD_WIDTH};
    (0.0..=FIELD_WIDTH).contains(&pos.x) && (0.0..=FIELD_HEIGHT).contains(&pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_heading_vector() {
        let right = heading_vector(0.0);
        assert!((right - Vec2::X).length() < 1e-6);

        let down = heading_vector(FRAC_PI_2);
        assert!((down - Vec2::Y).length() < 1e-6);
    }

    #[test]
    fn test_normalize_angle() {
        use std::f32::consts::PI;
        assert!((normalize_angle(2.5 * PI) - 0.5 * PI).abs() < 1e-5);
        assert!((normalize_angle(-2.5 * PI) + 0.5 * PI).abs() < 1e-5);
        assert_eq!(normalize_angle(0.25), 0.25);
    }

    #[test]
    fn test_clamp_to_field() {
        let half = Vec2::new(20.0, 15.0);
        assert_eq!(clamp_to_field(Vec2::new(-50.0, 700.0), half), Vec2::new(20.0, 585.0));
        assert_eq!(clamp_to_field(Vec2::new(400.0, 300.0), half), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_in_field_is_inclusive() {
        assert!(in_field(Vec2::new(0.0, 0.0)));
        assert!(in_field(Vec2::new(800.0, 600.0)));
        assert!(!in_field(Vec2::new(800.1, 300.0)));
        assert!(!in_field(Vec2::new(400.0, -0.1)));
    }
}
