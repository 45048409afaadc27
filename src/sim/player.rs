//! The player's tank

use glam::Vec2;

use crate::consts::*;
use crate::{clamp_to_field, heading_vector};

/// Rotation direction for a single turn step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise on screen (heading decreases)
    Left,
    /// Clockwise on screen (heading increases)
    Right,
}

/// Movement along the current heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drive {
    Forward,
    Backward,
}

/// Player-controlled tank
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerTank {
    pub pos: Vec2,
    /// Facing angle in radians (unbounded, wraps through cos/sin)
    pub heading: f32,
    pub speed: f32,
    /// Stored but never decremented
    pub health: i32,
}

impl Default for PlayerTank {
    fn default() -> Self {
        Self::new(Vec2::from(PLAYER_START))
    }
}

impl PlayerTank {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos: clamp_to_field(pos, Self::half_extents()),
            heading: 0.0,
            speed: PLAYER_SPEED,
            health: TANK_HEALTH,
        }
    }

    /// Half of the body width/height
    #[inline]
    pub fn half_extents() -> Vec2 {
        Vec2::new(TANK_WIDTH / 2.0, TANK_HEIGHT / 2.0)
    }

    pub fn rotate(&mut self, turn: Turn) {
        match turn {
            Turn::Left => self.heading -= PLAYER_TURN_STEP,
            Turn::Right => self.heading += PLAYER_TURN_STEP,
        }
    }

    /// Move one step along (or against) the heading, staying on the field
    pub fn drive(&mut self, drive: Drive) {
        let dir = match drive {
            Drive::Forward => heading_vector(self.heading),
            Drive::Backward => -heading_vector(self.heading),
        };
        self.pos = clamp_to_field(self.pos + dir * self.speed, Self::half_extents());
    }

    /// Muzzle tip, used for drawing the barrel
    pub fn barrel_tip(&self) -> Vec2 {
        self.pos + heading_vector(self.heading) * BARREL_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn in_bounds(pos: Vec2) -> bool {
        let half = PlayerTank::half_extents();
        pos.x >= half.x
            && pos.x <= FIELD_WIDTH - half.x
            && pos.y >= half.y
            && pos.y <= FIELD_HEIGHT - half.y
    }

    #[test]
    fn test_drive_forward_follows_heading() {
        let mut player = PlayerTank::new(Vec2::new(400.0, 300.0));
        player.drive(Drive::Forward);
        assert!((player.pos - Vec2::new(403.0, 300.0)).length() < 1e-5);

        player.drive(Drive::Backward);
        player.drive(Drive::Backward);
        assert!((player.pos - Vec2::new(397.0, 300.0)).length() < 1e-5);
    }

    #[test]
    fn test_drive_clamps_at_wall() {
        let mut player = PlayerTank::new(Vec2::new(21.0, 300.0));
        player.heading = std::f32::consts::PI;
        player.drive(Drive::Forward);
        assert_eq!(player.pos.x, 20.0);
        player.drive(Drive::Forward);
        assert_eq!(player.pos.x, 20.0);
    }

    #[test]
    fn test_start_position() {
        let player = PlayerTank::default();
        assert_eq!(player.pos, Vec2::new(400.0, 500.0));
        assert_eq!(player.heading, 0.0);
        assert_eq!(player.health, TANK_HEALTH);
    }

    #[test]
    fn test_barrel_tip() {
        let player = PlayerTank::new(Vec2::new(100.0, 100.0));
        assert!((player.barrel_tip() - Vec2::new(130.0, 100.0)).length() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_drive_stays_in_bounds(
            x in 20.0f32..=780.0,
            y in 15.0f32..=585.0,
            heading in -10.0f32..10.0,
            steps in proptest::collection::vec(any::<bool>(), 0..400),
        ) {
            let mut player = PlayerTank::new(Vec2::new(x, y));
            player.heading = heading;
            for forward in steps {
                player.drive(if forward { Drive::Forward } else { Drive::Backward });
                prop_assert!(in_bounds(player.pos));
            }
        }

        #[test]
        fn prop_rotate_left_then_right_restores_heading(
            heading in -10.0f32..10.0,
            n in 0usize..200,
        ) {
            let mut player = PlayerTank::default();
            player.heading = heading;
            for _ in 0..n {
                player.rotate(Turn::Left);
            }
            for _ in 0..n {
                player.rotate(Turn::Right);
            }
            prop_assert!((player.heading - heading).abs() < 1e-3);
        }
    }
}
