//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Player ---

/// Player starting hit points.
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Distance at which an enemy damages the player and is consumed.
pub const CONTACT_RADIUS: f64 = 0.5;

/// Hit points the player loses per enemy contact.
pub const CONTACT_DAMAGE: i32 = 25;

// --- Enemies ---

/// Enemy starting hit points.
pub const ENEMY_MAX_HEALTH: i32 = 100;

/// Collision radius used for enemy movement and spawn placement.
pub const ENEMY_RADIUS: f64 = 0.3;

/// World units an enemy moves per tick. A fixed per-tick displacement,
/// not delta-time scaled; the fixed tick rate keeps speed well-defined.
pub const ENEMY_STEP: f64 = 0.003;

/// Distance at which a waypoint counts as reached.
pub const WAYPOINT_REACHED_RADIUS: f64 = 0.1;

/// Minimum simulated seconds between path recomputations per enemy.
pub const PATH_REPLAN_INTERVAL_SECS: f64 = 0.1;

// --- Spawning ---

/// Safe-zone anchor points enemies spawn near, in tile units.
pub const SPAWN_ANCHORS: [(f64, f64); 4] = [(3.5, 3.5), (8.5, 3.5), (3.5, 8.5), (8.5, 8.5)];

/// Uniform jitter applied to each axis of the chosen anchor.
pub const SPAWN_JITTER: f64 = 1.0;

// --- Rendering ---

/// Default camera field of view in radians (60 degrees).
pub const DEFAULT_FOV: f64 = std::f64::consts::FRAC_PI_3;

/// Minimum on-screen sprite side length, in pixels.
pub const MIN_SPRITE_SIZE: f64 = 16.0;

/// Health bar width as a fraction of the apparent sprite size.
pub const HEALTH_BAR_WIDTH_FACTOR: f64 = 0.5;

/// Health bar height as a fraction of the apparent sprite size.
pub const HEALTH_BAR_HEIGHT_FACTOR: f64 = 0.1;

/// How far above the sprite center the bar sits, as a fraction of size.
pub const HEALTH_BAR_RAISE_FACTOR: f64 = 1.0 / 3.0;
