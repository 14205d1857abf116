//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Coarse game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play.
    #[default]
    Playing,
    /// Lives exhausted. Terminal until a reset runs; the score tracker
    /// invokes that reset synchronously, so this phase is only observable
    /// through the `GameOver` event.
    GameOver,
}

/// Entity class tag, mirrored into render deltas so the frontend can pick
/// the right visual for a newly added handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityClass {
    /// The player's craft (singleton).
    Craft,
    /// A projectile fired by the craft.
    Projectile,
    /// An enemy craft advancing toward the player.
    Hostile,
    /// A collectible granting score on contact.
    Pickup,
    /// A short-lived explosion fragment, visual only.
    Particle,
}
