//! Kinematic integration system.
//!
//! Advances projectile, hostile, and pickup positions by velocity * dt.
//! Particles are aged and moved by the particle system instead, after the
//! collision pass. The craft is moved by discrete steps, never integrated.

use hecs::World;

use starfire_core::components::{Hostile, Pickup, Position, Projectile, Spin, Velocity};
use starfire_core::constants::PICKUP_SPIN_STEP;

/// Integrate one frame of motion for every movable class.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (pos, vel, _proj)) in
        world.query_mut::<(&mut Position, &Velocity, &Projectile)>()
    {
        pos.0 += vel.0 * dt;
    }

    for (_entity, (pos, vel, _hostile)) in
        world.query_mut::<(&mut Position, &Velocity, &Hostile)>()
    {
        pos.0 += vel.0 * dt;
    }

    // Pickups also spin a fixed step per tick, regardless of dt.
    for (_entity, (pos, vel, spin, _pickup)) in
        world.query_mut::<(&mut Position, &Velocity, &mut Spin, &Pickup)>()
    {
        pos.0 += vel.0 * dt;
        spin.angle += PICKUP_SPIN_STEP;
    }
}
