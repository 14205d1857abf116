//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// World-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Velocity in units per second. Constant for the lifetime of an entity;
/// set from the class speed at spawn (or randomized, for particles).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Marks the player's craft. At most one exists; it may be absent until
/// the embedding application deploys it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerCraft;

/// Marks a projectile fired by the craft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Marks a hostile craft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Marks a collectible pickup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup;

/// Explosion fragment state. Aged each tick and removed once age passes
/// lifetime (strictly — a particle whose age equals its lifetime survives
/// one more update).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    /// Seconds since spawn.
    pub age: f32,
    /// Seconds this particle lives.
    pub lifetime: f32,
}

/// Spin angle for pickups, advanced a fixed step per tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spin {
    /// Accumulated rotation in radians.
    pub angle: f32,
}
