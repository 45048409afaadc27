//! Game session and core simulation types
//!
//! Everything the tick loop mutates lives in `GameSession`; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::enemy::EnemyTank;
use super::player::PlayerTank;
use super::projectile::Projectile;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Run ended, waiting for restart.
    ///
    /// No loss condition exists yet, so normal play never enters this phase.
    GameOver,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A projectile left the muzzle
    ProjectileFired { at: Vec2, heading: f32 },
    /// A projectile ran out of lifetime or left the field
    ProjectileExpired { at: Vec2 },
    /// The enemy was hit and replaced
    EnemyDestroyed {
        at: Vec2,
        respawn_at: Vec2,
        score: u64,
    },
    /// Session was reset in place
    Restarted,
}

/// One play session
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Seed the session RNG was created from
    pub seed: u64,
    /// Drives enemy wander and respawn
    pub rng: Pcg32,
    pub player: PlayerTank,
    pub enemy: EnemyTank,
    /// Live projectiles in fire order
    pub projectiles: Vec<Projectile>,
    pub score: u64,
    /// Enemies destroyed this session
    pub kills: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: PlayerTank::default(),
            enemy: EnemyTank::default(),
            projectiles: Vec::new(),
            score: 0,
            kills: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
            events: Vec::new(),
        }
    }

    /// Reset to the starting layout, keeping the RNG stream running
    pub fn reset(&mut self) {
        self.player = PlayerTank::default();
        self.enemy = EnemyTank::default();
        self.projectiles.clear();
        self.score = 0;
        self.kills = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        log::info!("Session reset (seed {})", self.seed);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Fire from the player's current position and heading
    pub fn fire(&mut self) {
        let projectile = Projectile::new(self.player.pos, self.player.heading);
        self.events.push(GameEvent::ProjectileFired {
            at: projectile.pos,
            heading: projectile.heading,
        });
        self.projectiles.push(projectile);
    }

    /// Replace the enemy with a fresh one somewhere in the respawn region
    pub fn respawn_enemy(&mut self) -> Vec2 {
        self.enemy = EnemyTank::spawn_random(&mut self.rng);
        self.enemy.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_layout() {
        let session = GameSession::new(1);
        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.player.pos, Vec2::new(400.0, 500.0));
        assert_eq!(session.enemy.pos, Vec2::new(400.0, 100.0));
        assert!(session.projectiles.is_empty());
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_fire_copies_heading() {
        let mut session = GameSession::new(1);
        session.player.heading = 1.25;
        session.fire();
        session.player.heading = -2.0;

        assert_eq!(session.projectiles.len(), 1);
        assert_eq!(session.projectiles[0].heading, 1.25);
        assert_eq!(session.projectiles[0].pos, session.player.pos);
        assert!(matches!(session.events[0], GameEvent::ProjectileFired { .. }));
    }

    #[test]
    fn test_reset_in_place() {
        let mut session = GameSession::new(3);
        session.score = 120;
        session.kills = 12;
        session.player.pos = Vec2::new(50.0, 50.0);
        session.fire();
        session.phase = GamePhase::GameOver;

        session.reset();

        assert_eq!(session.score, 0);
        assert_eq!(session.kills, 0);
        assert!(session.projectiles.is_empty());
        assert_eq!(session.player, PlayerTank::default());
        assert_eq!(session.enemy, EnemyTank::default());
        assert!(!session.is_game_over());
        assert_eq!(session.seed, 3);
    }
}
