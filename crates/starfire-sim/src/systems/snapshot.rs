//! Snapshot building — the complete visible state for one frame.

use hecs::World;

use starfire_core::components::{
    Hostile, Particle, Pickup, PlayerCraft, Position, Projectile, Spin,
};
use starfire_core::events::{GameEvent, RenderDelta};
use starfire_core::state::{CraftView, EntityView, FrameSnapshot, GameState, ParticleView, PickupView};
use starfire_core::types::SimTime;

use crate::world_setup::entity_id;

/// Build the frame snapshot from the world, state, and the tick's events.
pub fn build(
    world: &World,
    time: &SimTime,
    state: &GameState,
    events: Vec<GameEvent>,
    render_deltas: Vec<RenderDelta>,
) -> FrameSnapshot {
    let craft = {
        let mut query = world.query::<(&Position, &PlayerCraft)>();
        query.iter().next().map(|(entity, (pos, _craft))| CraftView {
            id: entity_id(entity),
            position: pos.0,
        })
    };

    let projectiles = {
        let mut query = world.query::<(&Position, &Projectile)>();
        query
            .iter()
            .map(|(entity, (pos, _proj))| EntityView {
                id: entity_id(entity),
                position: pos.0,
            })
            .collect()
    };

    let hostiles = {
        let mut query = world.query::<(&Position, &Hostile)>();
        query
            .iter()
            .map(|(entity, (pos, _hostile))| EntityView {
                id: entity_id(entity),
                position: pos.0,
            })
            .collect()
    };

    let pickups = {
        let mut query = world.query::<(&Position, &Spin, &Pickup)>();
        query
            .iter()
            .map(|(entity, (pos, spin, _pickup))| PickupView {
                id: entity_id(entity),
                position: pos.0,
                spin: spin.angle,
            })
            .collect()
    };

    let particles = {
        let mut query = world.query::<(&Position, &Particle)>();
        query
            .iter()
            .map(|(entity, (pos, particle))| ParticleView {
                id: entity_id(entity),
                position: pos.0,
                age: particle.age,
            })
            .collect()
    };

    FrameSnapshot {
        time: *time,
        phase: state.phase,
        score: state.score,
        lives: state.lives,
        craft,
        projectiles,
        hostiles,
        pickups,
        particles,
        events,
        render_deltas,
    }
}
