//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session by exactly one tick.

use super::collision::hits;
use super::player::{Drive, Turn};
use super::state::{GameEvent, GameSession};
use crate::consts::*;
use crate::{distance, normalize_angle};

/// Autopilot keeps roughly this far from the enemy
const AUTOPILOT_STANDOFF: f32 = 250.0;
/// Autopilot fires when the heading error is below this
const AUTOPILOT_AIM_TOLERANCE: f32 = 0.1;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held: turn counter-clockwise
    pub rotate_left: bool,
    /// Held: turn clockwise
    pub rotate_right: bool,
    /// Held: drive along heading
    pub forward: bool,
    /// Held: drive against heading (wins over `forward`)
    pub backward: bool,
    /// Edge: fire one projectile
    pub fire: bool,
    /// Edge: restart after game over
    pub restart: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the session by one tick
pub fn tick(session: &mut GameSession, input: &TickInput) {
    session.events.clear();

    if session.is_game_over() {
        if input.restart {
            session.reset();
            session.events.push(GameEvent::Restarted);
        }
        return;
    }

    let input = if input.idle_mode {
        autopilot(session, input)
    } else {
        *input
    };

    // Fire before moving: the shot leaves from where the player stood
    if input.fire {
        session.fire();
    }

    if input.rotate_left {
        session.player.rotate(Turn::Left);
    }
    if input.rotate_right {
        session.player.rotate(Turn::Right);
    }
    if input.backward {
        session.player.drive(Drive::Backward);
    } else if input.forward {
        session.player.drive(Drive::Forward);
    }

    session.enemy.tick(&mut session.rng);

    step_projectiles(session);

    session.time_ticks += 1;
}

/// Advance every projectile, resolving expiry and hits.
///
/// Works from a snapshot of the list and builds the next one; a hit replaces
/// the enemy immediately, so later projectiles test against the new one.
fn step_projectiles(session: &mut GameSession) {
    let snapshot = std::mem::take(&mut session.projectiles);
    let mut survivors = Vec::with_capacity(snapshot.len());

    for mut projectile in snapshot {
        projectile.tick();

        if !projectile.is_live() {
            log::trace!("Projectile expired at {:?}", projectile.pos);
            session
                .events
                .push(GameEvent::ProjectileExpired { at: projectile.pos });
        } else if hits(&projectile, &session.enemy) {
            let at = session.enemy.pos;
            session.score += HIT_SCORE;
            session.kills += 1;
            let respawn_at = session.respawn_enemy();
            log::debug!(
                "Enemy destroyed at {:?}, respawned at {:?}, score {}",
                at,
                respawn_at,
                session.score
            );
            session.events.push(GameEvent::EnemyDestroyed {
                at,
                respawn_at,
                score: session.score,
            });
        } else {
            survivors.push(projectile);
        }
    }

    session.projectiles = survivors;
}

/// Build the input the autopilot would press this tick
fn autopilot(session: &GameSession, input: &TickInput) -> TickInput {
    let player = &session.player;
    let to_enemy = session.enemy.pos - player.pos;
    let desired = to_enemy.y.atan2(to_enemy.x);
    let error = normalize_angle(desired - player.heading);

    let half_step = PLAYER_TURN_STEP / 2.0;
    let aimed = error.abs() < AUTOPILOT_AIM_TOLERANCE;

    TickInput {
        rotate_left: error < -half_step,
        rotate_right: error > half_step,
        forward: distance(player.pos, session.enemy.pos) > AUTOPILOT_STANDOFF,
        backward: false,
        fire: aimed && session.projectiles.is_empty(),
        restart: input.restart,
        idle_mode: true,
    }
}
