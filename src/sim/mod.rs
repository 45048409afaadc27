//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (projectiles in fire order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;

pub use collision::hits;
pub use enemy::EnemyTank;
pub use player::{Drive, PlayerTank, Turn};
pub use projectile::Projectile;
pub use state::{GameEvent, GamePhase, GameSession};
pub use tick::{TickInput, tick};
