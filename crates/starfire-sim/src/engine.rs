//! Game engine — the per-frame core of the game.
//!
//! `GameEngine` owns the hecs ECS world, drains queued commands, runs all
//! systems in a fixed order, and produces a `FrameSnapshot` per tick.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starfire_core::commands::SimCommand;
use starfire_core::components::{PlayerCraft, Position};
use starfire_core::constants::{CRAFT_STEP, LATERAL_LIMIT};
use starfire_core::enums::EntityClass;
use starfire_core::events::{GameEvent, RenderDelta};
use starfire_core::state::{FrameSnapshot, GameState};
use starfire_core::types::SimTime;

use crate::systems;
use crate::systems::spawner::SpawnScheduler;
use crate::world_setup;

/// Configuration for starting a new engine.
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The game engine. Owns the ECS world and all simulation state.
pub struct GameEngine {
    world: World,
    state: GameState,
    time: SimTime,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SimCommand>,
    scheduler: SpawnScheduler,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    render_deltas: Vec<RenderDelta>,
}

impl GameEngine {
    /// Create a new engine with the given config.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            world: World::new(),
            state: GameState::default(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            scheduler: SpawnScheduler::default(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            render_deltas: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt` seconds and return the
    /// resulting snapshot.
    ///
    /// A negative or non-finite `dt` clamps to zero: a no-motion tick,
    /// never a fault.
    pub fn tick(&mut self, dt: f32) -> FrameSnapshot {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        self.process_commands();

        systems::movement::run(&mut self.world, dt);
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.render_deltas,
        );
        systems::collision::run(
            &mut self.world,
            &mut self.state,
            &mut self.rng,
            &mut self.events,
            &mut self.render_deltas,
        );
        systems::particles::run(
            &mut self.world,
            dt,
            &mut self.despawn_buffer,
            &mut self.render_deltas,
        );
        // Scheduler requests land in the queue and materialize at the next
        // tick boundary, after this frame's snapshot.
        systems::spawner::run(
            &mut self.scheduler,
            &mut self.rng,
            &mut self.command_queue,
            dt,
        );

        self.time.advance(dt);

        let events = std::mem::take(&mut self.events);
        let render_deltas = std::mem::take(&mut self.render_deltas);
        systems::snapshot::build(&self.world, &self.time, &self.state, events, render_deltas)
    }

    /// Clear all transient entities and restore fresh score/lives.
    /// Invoked automatically on game over; also callable by the embedder.
    pub fn reset(&mut self) {
        systems::reset::run(
            &mut self.world,
            &mut self.state,
            &mut self.events,
            &mut self.render_deltas,
        );
    }

    /// Get the current game state (score, lives, phase).
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for tests that need
    /// entities at exact positions).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a mutable reference to the game state (for tests).
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Intents that need a craft are silently
    /// ignored while none is deployed.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::MoveLeft => self.step_craft(-CRAFT_STEP),
            SimCommand::MoveRight => self.step_craft(CRAFT_STEP),
            SimCommand::Fire => {
                if let Some((_craft, position)) = world_setup::find_craft(&self.world) {
                    let entity = world_setup::spawn_projectile(&mut self.world, position);
                    self.push_added(entity, EntityClass::Projectile);
                }
            }
            SimCommand::DeployCraft => {
                if world_setup::find_craft(&self.world).is_none() {
                    let entity = world_setup::spawn_craft(&mut self.world);
                    self.push_added(entity, EntityClass::Craft);
                    log::debug!("craft deployed");
                }
            }
            SimCommand::SpawnHostile { position } => {
                let entity = world_setup::spawn_hostile(&mut self.world, position);
                self.push_added(entity, EntityClass::Hostile);
            }
            SimCommand::SpawnPickup { position } => {
                let entity = world_setup::spawn_pickup(&mut self.world, position);
                self.push_added(entity, EntityClass::Pickup);
            }
        }
    }

    /// Move the craft one discrete step, clamped to the lateral bounds.
    fn step_craft(&mut self, step: f32) {
        for (_entity, (pos, _craft)) in self.world.query_mut::<(&mut Position, &PlayerCraft)>() {
            pos.0.x = (pos.0.x + step).clamp(-LATERAL_LIMIT, LATERAL_LIMIT);
        }
    }

    fn push_added(&mut self, entity: Entity, class: EntityClass) {
        self.render_deltas.push(RenderDelta::Added {
            id: world_setup::entity_id(entity),
            class,
        });
    }
}
