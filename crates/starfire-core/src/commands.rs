//! Commands sent from external collaborators to the simulation.
//!
//! Commands are queued and drained at the next tick boundary, so a command
//! arriving mid-tick never mutates a scan already underway.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// All inputs the simulation consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    // --- Input intents ---
    /// Step the craft one increment to the left. Ignored while no craft
    /// is deployed.
    MoveLeft,
    /// Step the craft one increment to the right. Ignored while no craft
    /// is deployed.
    MoveRight,
    /// Fire a projectile from the craft's current position. Ignored while
    /// no craft is deployed.
    Fire,

    // --- Lifecycle ---
    /// Deploy the player craft once its visual asset is ready. Ignored if
    /// a craft already exists.
    DeployCraft,

    // --- Spawn requests (from the scheduler or an external timer) ---
    /// Insert a hostile at the given position.
    SpawnHostile { position: Vec3 },
    /// Insert a pickup at the given position.
    SpawnPickup { position: Vec3 },
}
