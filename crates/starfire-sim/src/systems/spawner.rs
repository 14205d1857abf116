//! Spawn scheduler — periodic hostile and pickup spawn requests.
//!
//! Two independent interval accumulators, deliberately not synchronized to
//! the tick rate: each fires whenever its accumulated elapsed time crosses
//! its period, possibly more than once after a long frame. Requests are
//! enqueued as commands and become live entities at the next tick
//! boundary, so a request raised mid-tick never joins a scan already
//! underway.

use std::collections::VecDeque;

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfire_core::commands::SimCommand;
use starfire_core::constants::{
    HOSTILE_SPAWN_PERIOD, PICKUP_SPAWN_PERIOD, SPAWN_DEPTH, SPAWN_LATERAL_RANGE,
};

/// An accumulator that fires every `period_secs` of elapsed time.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period_secs: f32,
    accumulated: f32,
}

impl IntervalTimer {
    pub fn new(period_secs: f32) -> Self {
        Self {
            period_secs,
            accumulated: 0.0,
        }
    }

    /// Advance by `dt` seconds; returns how many times the timer fired.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulated += dt;
        let mut fired = 0;
        while self.accumulated >= self.period_secs {
            self.accumulated -= self.period_secs;
            fired += 1;
        }
        fired
    }
}

/// The two periodic spawn sources.
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    hostile: IntervalTimer,
    pickup: IntervalTimer,
}

impl Default for SpawnScheduler {
    fn default() -> Self {
        Self {
            hostile: IntervalTimer::new(HOSTILE_SPAWN_PERIOD),
            pickup: IntervalTimer::new(PICKUP_SPAWN_PERIOD),
        }
    }
}

/// Advance both timers and enqueue a spawn command per firing, each with a
/// freshly randomized entry position.
pub fn run(
    scheduler: &mut SpawnScheduler,
    rng: &mut ChaCha8Rng,
    queue: &mut VecDeque<SimCommand>,
    dt: f32,
) {
    for _ in 0..scheduler.hostile.advance(dt) {
        let position = entry_position(rng);
        log::debug!("hostile spawn requested at {position}");
        queue.push_back(SimCommand::SpawnHostile { position });
    }
    for _ in 0..scheduler.pickup.advance(dt) {
        let position = entry_position(rng);
        log::debug!("pickup spawn requested at {position}");
        queue.push_back(SimCommand::SpawnPickup { position });
    }
}

/// Random entry position: lateral within the spawn band, at the far edge
/// of the playfield.
fn entry_position(rng: &mut ChaCha8Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-SPAWN_LATERAL_RANGE..SPAWN_LATERAL_RANGE),
        0.0,
        SPAWN_DEPTH,
    )
}
