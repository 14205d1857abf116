//! Collision detection and resolution.
//!
//! Three fixed-radius passes per tick: projectile-versus-hostile,
//! craft-versus-hostile, craft-versus-pickup. Each pass scans an owned
//! snapshot of `(entity, position)` pairs, so removal mid-pass can never
//! skip a surviving entity. A pair whose entity was already removed
//! earlier in the tick is silently skipped.
//!
//! Consequences are applied per detection, not batched: the score tracker
//! runs immediately for each event, and a fatal craft-hostile hit triggers
//! the reset synchronously inside the pass. Remaining pairs then reference
//! removed entities and fall through the skip rule.

use glam::Vec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use starfire_core::components::{Hostile, Pickup, Position, Projectile};
use starfire_core::constants::{CRAFT_HIT_RADIUS, PROJECTILE_HIT_RADIUS};
use starfire_core::events::{CollisionEvent, GameEvent, RenderDelta};
use starfire_core::state::GameState;

use crate::systems::{particles, reset, score};
use crate::world_setup::{entity_id, find_craft};

/// Run all collision passes and apply their consequences.
pub fn run(
    world: &mut World,
    state: &mut GameState,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    deltas: &mut Vec<RenderDelta>,
) {
    projectile_hostile_pass(world, state, rng, events, deltas);
    craft_hostile_pass(world, state, events, deltas);
    craft_pickup_pass(world, state, events, deltas);
}

/// Projectiles destroy hostiles within `PROJECTILE_HIT_RADIUS`, awarding
/// score and bursting an explosion at the hostile's pre-removal position.
fn projectile_hostile_pass(
    world: &mut World,
    state: &mut GameState,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    deltas: &mut Vec<RenderDelta>,
) {
    let projectiles = collect_class::<Projectile>(world);
    let hostiles = collect_class::<Hostile>(world);

    for &(projectile, proj_pos) in &projectiles {
        for &(hostile, hostile_pos) in &hostiles {
            // The projectile was consumed by an earlier pair.
            if !world.contains(projectile) {
                break;
            }
            if !world.contains(hostile) {
                continue;
            }
            if proj_pos.distance(hostile_pos) < PROJECTILE_HIT_RADIUS {
                remove_entity(world, projectile, deltas);
                remove_entity(world, hostile, deltas);
                score::apply(
                    state,
                    &CollisionEvent::ProjectileHitHostile {
                        projectile: entity_id(projectile),
                        hostile: entity_id(hostile),
                        position: hostile_pos,
                    },
                    events,
                );
                particles::spawn_explosion(world, rng, hostile_pos, deltas);
            }
        }
    }
}

/// Hostiles reaching the craft cost a life each; the game-over check runs
/// immediately after each decrement.
fn craft_hostile_pass(
    world: &mut World,
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
    deltas: &mut Vec<RenderDelta>,
) {
    let Some((_craft, craft_pos)) = find_craft(world) else {
        return;
    };

    let hostiles = collect_class::<Hostile>(world);
    for &(hostile, hostile_pos) in &hostiles {
        if !world.contains(hostile) {
            continue;
        }
        if craft_pos.distance(hostile_pos) < CRAFT_HIT_RADIUS {
            remove_entity(world, hostile, deltas);
            let fatal = score::apply(
                state,
                &CollisionEvent::CraftHitHostile {
                    hostile: entity_id(hostile),
                },
                events,
            );
            if fatal {
                reset::run(world, state, events, deltas);
            }
        }
    }
}

/// The craft collects pickups within `CRAFT_HIT_RADIUS`.
fn craft_pickup_pass(
    world: &mut World,
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
    deltas: &mut Vec<RenderDelta>,
) {
    let Some((_craft, craft_pos)) = find_craft(world) else {
        return;
    };

    let pickups = collect_class::<Pickup>(world);
    for &(pickup, pickup_pos) in &pickups {
        if !world.contains(pickup) {
            continue;
        }
        if craft_pos.distance(pickup_pos) < CRAFT_HIT_RADIUS {
            remove_entity(world, pickup, deltas);
            score::apply(
                state,
                &CollisionEvent::CraftHitPickup {
                    pickup: entity_id(pickup),
                },
                events,
            );
        }
    }
}

/// Snapshot the entities and positions of one class before a pass mutates
/// the world.
fn collect_class<T: hecs::Component>(world: &mut World) -> Vec<(Entity, Vec3)> {
    world
        .query_mut::<(&Position, &T)>()
        .into_iter()
        .map(|(entity, (pos, _tag))| (entity, pos.0))
        .collect()
}

/// Despawn an entity and emit its `Removed` delta. Re-removal is a no-op.
fn remove_entity(world: &mut World, entity: Entity, deltas: &mut Vec<RenderDelta>) {
    if world.despawn(entity).is_ok() {
        deltas.push(RenderDelta::Removed {
            id: entity_id(entity),
        });
    }
}
