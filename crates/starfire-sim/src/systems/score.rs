//! Score and life bookkeeping.
//!
//! Consumes collision events, mutates `GameState`, and emits a HUD update
//! per mutation. The caller resolves a `true` return (lives exhausted) by
//! running the reset synchronously — the check happens here, per event,
//! never batched at tick end.

use starfire_core::constants::{HOSTILE_SCORE, PICKUP_SCORE};
use starfire_core::enums::GamePhase;
use starfire_core::events::{CollisionEvent, GameEvent};
use starfire_core::state::GameState;

/// Apply one collision event to the game state. Returns `true` when the
/// event exhausted the player's lives and a reset must follow immediately.
pub fn apply(state: &mut GameState, event: &CollisionEvent, events: &mut Vec<GameEvent>) -> bool {
    match event {
        CollisionEvent::ProjectileHitHostile { .. } => {
            state.score += HOSTILE_SCORE;
            push_hud(state, events);
            false
        }
        CollisionEvent::CraftHitPickup { .. } => {
            state.score += PICKUP_SCORE;
            push_hud(state, events);
            false
        }
        CollisionEvent::CraftHitHostile { .. } => {
            state.lives -= 1;
            push_hud(state, events);
            if state.lives <= 0 {
                state.phase = GamePhase::GameOver;
                events.push(GameEvent::GameOver);
                log::info!("lives exhausted at score {}", state.score);
                true
            } else {
                false
            }
        }
    }
}

fn push_hud(state: &GameState, events: &mut Vec<GameEvent>) {
    events.push(GameEvent::HudChanged {
        score: state.score,
        lives: state.lives,
    });
}
