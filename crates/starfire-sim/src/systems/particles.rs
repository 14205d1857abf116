//! Explosion particle system.
//!
//! Spawns short-lived bursts from destroyed hostiles and ages them out.
//! Particles are visual only; they never participate in collision.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfire_core::components::{Particle, Position, Velocity};
use starfire_core::constants::{EXPLOSION_PARTICLE_COUNT, EXPLOSION_SPREAD, PARTICLE_LIFETIME};
use starfire_core::enums::EntityClass;
use starfire_core::events::RenderDelta;

use crate::world_setup::entity_id;

/// Burst a full complement of particles at `position`, each with a
/// uniformly random velocity per axis.
pub fn spawn_explosion(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Vec3,
    deltas: &mut Vec<RenderDelta>,
) {
    for _ in 0..EXPLOSION_PARTICLE_COUNT {
        let velocity = Vec3::new(
            rng.gen_range(-EXPLOSION_SPREAD..EXPLOSION_SPREAD),
            rng.gen_range(-EXPLOSION_SPREAD..EXPLOSION_SPREAD),
            rng.gen_range(-EXPLOSION_SPREAD..EXPLOSION_SPREAD),
        );
        let entity = world.spawn((
            Position(position),
            Velocity(velocity),
            Particle {
                age: 0.0,
                lifetime: PARTICLE_LIFETIME,
            },
        ));
        deltas.push(RenderDelta::Added {
            id: entity_id(entity),
            class: EntityClass::Particle,
        });
    }
}

/// Move and age every particle, removing those whose age has passed their
/// lifetime. The comparison is strict: a particle whose age equals its
/// lifetime survives one more update.
pub fn run(world: &mut World, dt: f32, despawn_buffer: &mut Vec<Entity>, deltas: &mut Vec<RenderDelta>) {
    despawn_buffer.clear();

    for (entity, (pos, vel, particle)) in
        world.query_mut::<(&mut Position, &Velocity, &mut Particle)>()
    {
        pos.0 += vel.0 * dt;
        particle.age += dt;
        if particle.age > particle.lifetime {
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
