//! Cleanup system: removes entities that have left the playfield.
//!
//! Runs right after motion integration. Uses a pre-allocated buffer so a
//! scan never removes from the collection it is iterating.

use hecs::{Entity, World};

use starfire_core::components::{Hostile, Pickup, Position, Projectile};
use starfire_core::constants::PLAYFIELD_DEPTH;
use starfire_core::events::RenderDelta;

use crate::world_setup::entity_id;

/// Cull out-of-bounds entities and emit a `Removed` delta for each.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, deltas: &mut Vec<RenderDelta>) {
    despawn_buffer.clear();

    // Projectiles leave through the far edge.
    for (entity, (pos, _proj)) in world.query_mut::<(&Position, &Projectile)>() {
        if pos.0.z < -PLAYFIELD_DEPTH {
            despawn_buffer.push(entity);
        }
    }

    // Hostiles and pickups leave past the player.
    for (entity, (pos, _hostile)) in world.query_mut::<(&Position, &Hostile)>() {
        if pos.0.z > PLAYFIELD_DEPTH {
            despawn_buffer.push(entity);
        }
    }
    for (entity, (pos, _pickup)) in world.query_mut::<(&Position, &Pickup)>() {
        if pos.0.z > PLAYFIELD_DEPTH {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            deltas.push(RenderDelta::Removed {
                id: entity_id(entity),
            });
        }
    }
}
