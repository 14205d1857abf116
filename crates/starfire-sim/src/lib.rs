//! Simulation engine for STARFIRE.
//!
//! Owns the hecs ECS world, drains queued commands at tick boundaries,
//! runs systems in a fixed per-frame order, and produces `FrameSnapshot`s
//! for the frontend. Completely headless (no rendering dependency),
//! enabling deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use starfire_core as core;
