//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Marks an entity as a hostile enemy. Presence of this marker defines
/// membership in the roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Hit points, range [0, 100]. Clamped to >= 0 wherever decremented.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: i32,
}

/// Visual variant selector; the renderer looks sprites up by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Wraith,
}

/// One point along a computed route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
}

/// Route-following state for an enemy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathFollower {
    /// Current route toward the player; `None` until first planned,
    /// and whenever the planner finds no route.
    pub path: Option<Vec<Waypoint>>,
    /// Index of the next waypoint to reach. Once it reaches `path.len()`
    /// the enemy stands still until the next replan.
    pub next_waypoint: usize,
    /// Simulation time of the last replan; `None` means never planned,
    /// which forces a plan on the first tick.
    pub last_replan_secs: Option<f64>,
}
