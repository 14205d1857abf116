//! Reset: clear the transient entity collections and restore fresh state.
//!
//! The craft survives a reset — only projectiles, hostiles, pickups, and
//! particles are cleared. Idempotent: running twice yields identical state.

use hecs::{Component, Entity, World};

use starfire_core::components::{Hostile, Particle, Pickup, Projectile};
use starfire_core::constants::STARTING_LIVES;
use starfire_core::enums::GamePhase;
use starfire_core::events::{GameEvent, RenderDelta};
use starfire_core::state::GameState;

use crate::world_setup::entity_id;

/// Empty all transient collections, restore score/lives/phase, and emit
/// one HUD update.
pub fn run(
    world: &mut World,
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
    deltas: &mut Vec<RenderDelta>,
) {
    despawn_class::<Projectile>(world, deltas);
    despawn_class::<Hostile>(world, deltas);
    despawn_class::<Pickup>(world, deltas);
    despawn_class::<Particle>(world, deltas);

    state.score = 0;
    state.lives = STARTING_LIVES;
    state.phase = GamePhase::Playing;

    events.push(GameEvent::HudChanged {
        score: state.score,
        lives: state.lives,
    });
    log::info!("world reset");
}

fn despawn_class<T: Component>(world: &mut World, deltas: &mut Vec<RenderDelta>) {
    let doomed: Vec<Entity> = world
        .query_mut::<&T>()
        .into_iter()
        .map(|(entity, _tag)| entity)
        .collect();
    for entity in doomed {
        if world.despawn(entity).is_ok() {
            deltas.push(RenderDelta::Removed {
                id: entity_id(entity),
            });
        }
    }
}
