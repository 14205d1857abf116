//! Entity spawn factories and world lookup helpers.
//!
//! Creates craft, projectile, hostile, and pickup entities with their
//! component bundles. Visual representation is the caller's concern; the
//! factories only hand back entity handles.

use glam::Vec3;
use hecs::{Entity, World};

use starfire_core::components::{Hostile, Pickup, PlayerCraft, Position, Projectile, Spin, Velocity};
use starfire_core::constants::{CRAFT_SPAWN_DEPTH, HOSTILE_SPEED, PICKUP_SPEED, PROJECTILE_SPEED};
use starfire_core::types::EntityId;

/// Opaque id for an entity handle, stable for render-layer correlation.
pub fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

/// Spawn the player craft at its deployment position.
pub fn spawn_craft(world: &mut World) -> Entity {
    world.spawn((
        PlayerCraft,
        Position(Vec3::new(0.0, 0.0, CRAFT_SPAWN_DEPTH)),
    ))
}

/// Spawn a projectile at the craft's position, heading toward decreasing
/// depth.
pub fn spawn_projectile(world: &mut World, position: Vec3) -> Entity {
    world.spawn((
        Projectile,
        Position(position),
        Velocity(Vec3::new(0.0, 0.0, -PROJECTILE_SPEED)),
    ))
}

/// Spawn a hostile heading toward increasing depth.
pub fn spawn_hostile(world: &mut World, position: Vec3) -> Entity {
    world.spawn((
        Hostile,
        Position(position),
        Velocity(Vec3::new(0.0, 0.0, HOSTILE_SPEED)),
    ))
}

/// Spawn a pickup heading toward increasing depth.
pub fn spawn_pickup(world: &mut World, position: Vec3) -> Entity {
    world.spawn((
        Pickup,
        Position(position),
        Velocity(Vec3::new(0.0, 0.0, PICKUP_SPEED)),
        Spin::default(),
    ))
}

/// The craft's entity and position, if one is deployed.
pub fn find_craft(world: &World) -> Option<(Entity, Vec3)> {
    let mut query = world.query::<(&Position, &PlayerCraft)>();
    query
        .iter()
        .next()
        .map(|(entity, (pos, _craft))| (entity, pos.0))
}
