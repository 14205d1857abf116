//! Game state and the per-frame snapshot sent to the frontend.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::STARTING_LIVES;
use crate::enums::GamePhase;
use crate::events::{GameEvent, RenderDelta};
use crate::types::{EntityId, SimTime};

/// Score, lives, and phase. Owned by the engine and threaded through the
/// systems by explicit reference, never as module-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Non-negative, monotonically non-decreasing within a run.
    pub score: u32,
    /// Decremented per craft-hostile hit; a run ends the moment this
    /// reaches zero, so it is never observed negative.
    pub lives: i32,
    pub phase: GamePhase,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            phase: GamePhase::Playing,
        }
    }
}

/// Complete per-frame state returned from each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: i32,
    pub craft: Option<CraftView>,
    pub projectiles: Vec<EntityView>,
    pub hostiles: Vec<EntityView>,
    pub pickups: Vec<PickupView>,
    pub particles: Vec<ParticleView>,
    /// HUD updates and game-flow events raised this tick, in order.
    pub events: Vec<GameEvent>,
    /// Entity add/remove deltas raised this tick, in order.
    pub render_deltas: Vec<RenderDelta>,
}

/// The player craft, when deployed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraftView {
    pub id: EntityId,
    pub position: Vec3,
}

/// A projectile or hostile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub position: Vec3,
}

/// A pickup with its current spin angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickupView {
    pub id: EntityId,
    pub position: Vec3,
    /// Rotation in radians for the visual.
    pub spin: f32,
}

/// An explosion fragment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub id: EntityId,
    pub position: Vec3,
    /// Seconds since spawn, for fade-out effects.
    pub age: f32,
}
