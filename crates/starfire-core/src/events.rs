//! Events emitted by the simulation for the HUD and render layers.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::EntityClass;
use crate::types::EntityId;

/// Events for the HUD sink and game-flow observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Score or lives changed; emitted on every mutation.
    HudChanged { score: u32, lives: i32 },
    /// Lives reached zero. The reset that follows runs synchronously, so
    /// by the time this event is observed the state is already fresh.
    GameOver,
}

/// Collision events produced by the collision pass and consumed by the
/// score tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CollisionEvent {
    /// A projectile struck a hostile. Carries the hostile's pre-removal
    /// position for the explosion burst.
    ProjectileHitHostile {
        projectile: EntityId,
        hostile: EntityId,
        position: Vec3,
    },
    /// A hostile reached the craft.
    CraftHitHostile { hostile: EntityId },
    /// The craft collected a pickup.
    CraftHitPickup { pickup: EntityId },
}

/// Per-tick add/remove deltas for a render layer tracking visual meshes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderDelta {
    /// An entity entered the world. The handle can be looked up in the
    /// snapshot views for position and class-specific state.
    Added { id: EntityId, class: EntityClass },
    /// An entity left the world; the render layer drops its mesh.
    Removed { id: EntityId },
}
