//! Simulation constants and tuning parameters.

// --- Playfield ---

/// Depth bound of the playfield; entities are culled past ±this value.
pub const PLAYFIELD_DEPTH: f32 = 100.0;

/// Lateral bound for the player craft.
pub const LATERAL_LIMIT: f32 = 80.0;

/// Depth at which hostiles and pickups enter the playfield.
pub const SPAWN_DEPTH: f32 = -100.0;

/// Half-width of the lateral band new hostiles and pickups spawn in.
pub const SPAWN_LATERAL_RANGE: f32 = 50.0;

/// Depth at which the player craft is deployed.
pub const CRAFT_SPAWN_DEPTH: f32 = 100.0;

// --- Kinematics ---

/// Projectile speed toward decreasing depth (units/second).
pub const PROJECTILE_SPEED: f32 = 50.0;

/// Hostile speed toward increasing depth (units/second).
pub const HOSTILE_SPEED: f32 = 30.0;

/// Pickup speed toward increasing depth (units/second).
pub const PICKUP_SPEED: f32 = 50.0;

/// Lateral distance the craft moves per discrete move intent.
pub const CRAFT_STEP: f32 = 5.0;

/// Pickup spin advance in radians per tick. Intentionally not scaled by
/// frame time: the coin turns a fixed step every update.
pub const PICKUP_SPIN_STEP: f32 = 0.05;

// --- Collision ---

/// Hit radius for projectile-versus-hostile tests.
pub const PROJECTILE_HIT_RADIUS: f32 = 5.0;

/// Hit radius for craft-versus-hostile and craft-versus-pickup tests.
pub const CRAFT_HIT_RADIUS: f32 = 10.0;

// --- Scoring ---

/// Score awarded for destroying a hostile with a projectile.
pub const HOSTILE_SCORE: u32 = 10;

/// Score awarded for collecting a pickup.
pub const PICKUP_SCORE: u32 = 5;

/// Lives at the start of a run and after every reset.
pub const STARTING_LIVES: i32 = 3;

// --- Particles ---

/// Number of particles in one explosion burst.
pub const EXPLOSION_PARTICLE_COUNT: usize = 10;

/// Particle lifetime in seconds.
pub const PARTICLE_LIFETIME: f32 = 0.5;

/// Particle velocities are drawn uniformly from ±this value per axis.
pub const EXPLOSION_SPREAD: f32 = 12.5;

// --- Spawn cadence ---

/// Seconds between hostile spawn requests.
pub const HOSTILE_SPAWN_PERIOD: f32 = 2.0;

/// Seconds between pickup spawn requests.
pub const PICKUP_SPAWN_PERIOD: f32 = 5.0;
