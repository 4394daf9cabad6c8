//! Simulation engine — the core of the enemy subsystem.
//!
//! `SimulationEngine` owns the hecs ECS world, the player record, and
//! simulation time; each tick it runs the pursuit sweep and produces a
//! `FrameSnapshot`. Completely headless, enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use duskmaze_core::constants::PLAYER_MAX_HEALTH;
use duskmaze_core::events::FrameEvent;
use duskmaze_core::state::FrameSnapshot;
use duskmaze_core::types::{PlayerState, Position, SimTime};
use duskmaze_core::world::{Geometry, PathPlanner};

use crate::systems;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub player_start: Position,
    /// Initial heading in radians.
    pub player_angle: f64,
    pub player_health: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player_start: Position::new(5.0, 5.0),
            player_angle: 0.0,
            player_health: PLAYER_MAX_HEALTH,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    player: PlayerState,
    time: SimTime,
    game_over: bool,
    rng: ChaCha8Rng,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<FrameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            player: PlayerState {
                position: config.player_start,
                angle: config.player_angle,
                health: config.player_health.max(0),
            },
            time: SimTime::default(),
            game_over: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Attempt to spawn one enemy at a safe position. Returns whether an
    /// enemy was added; a wall-blocked position is a silent no-op.
    ///
    /// Invoked by the surrounding game on its own cadence (timer,
    /// level init) — spawning is independent of `tick`.
    pub fn spawn_enemy(&mut self, geometry: &dyn Geometry) -> bool {
        systems::spawner::run(&mut self.world, &mut self.rng, geometry, &mut self.events)
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Once the player has died this stops mutating state and only reports
    /// the final world.
    pub fn tick(&mut self, geometry: &dyn Geometry, planner: &dyn PathPlanner) -> FrameSnapshot {
        if !self.game_over {
            systems::pursuit::run(
                &mut self.world,
                &mut self.player,
                &self.time,
                geometry,
                planner,
                &mut self.despawn_buffer,
                &mut self.events,
            );
            if self.player.health == 0 {
                log::info!("player died at tick {}", self.time.tick);
                self.game_over = true;
            }
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.game_over, &self.player, events)
    }

    /// Read the player record.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Mutable access to the player pose for the surrounding game's
    /// movement/turn handling.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Whether the player has died.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an enemy at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, x: f64, y: f64) -> hecs::Entity {
        use duskmaze_core::components::{Enemy, EnemyKind, Health, PathFollower};
        use duskmaze_core::constants::ENEMY_MAX_HEALTH;

        self.world.spawn((
            Enemy,
            Position::new(x, y),
            Health {
                hp: ENEMY_MAX_HEALTH,
            },
            EnemyKind::Wraith,
            PathFollower::default(),
        ))
    }

    /// Mutable world access (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
